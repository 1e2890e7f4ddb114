//! Health and status handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use auditor_rules::CacheStats;
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
    })
}

/// Daemon status response
#[derive(Debug, Serialize)]
pub struct DaemonStatusResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub stats: DaemonStats,
}

/// Daemon statistics
#[derive(Debug, Serialize)]
pub struct DaemonStats {
    pub rules: usize,
    pub questions: usize,
    pub stored_audits: usize,
    pub escalate_suspicious_terms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheStats>,
}

/// Daemon status endpoint
pub async fn daemon_status(State(state): State<AppState>) -> ApiResult<Json<DaemonStatusResponse>> {
    let audits = state.storage.list_audits().await?;
    let engine = state.classifier.engine();

    Ok(Json(DaemonStatusResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
        started_at: state.started_at,
        stats: DaemonStats {
            rules: engine.catalog().len(),
            questions: state.tree.nodes().len(),
            stored_audits: audits.len(),
            escalate_suspicious_terms: engine.config().escalate_suspicious_terms,
            cache: state.classifier.cache_stats(),
        },
    }))
}
