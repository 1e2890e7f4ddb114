//! Audit history handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use crate::storage::{AuditRecord, AuditStats};
use auditor_types::{AISystemInput, AnalysisResult};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Save audit request
#[derive(Debug, Deserialize)]
pub struct SaveAuditRequest {
    pub input: AISystemInput,
    /// Classified on save when absent
    #[serde(default)]
    pub result: Option<AnalysisResult>,
}

/// Bulk operation response
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

fn parse_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::BadRequest(format!("Invalid audit id: {}", id)))
}

/// List stored audits, newest first
pub async fn list_audits(State(state): State<AppState>) -> ApiResult<Json<Vec<AuditRecord>>> {
    Ok(Json(state.storage.list_audits().await?))
}

/// Store an audit
pub async fn create_audit(
    State(state): State<AppState>,
    Json(request): Json<SaveAuditRequest>,
) -> ApiResult<(StatusCode, Json<AuditRecord>)> {
    let result = match request.result {
        Some(result) => result,
        None => state.classifier.classify(&request.input),
    };
    let record = state.storage.save_audit(request.input, result).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Get a specific audit
pub async fn get_audit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AuditRecord>> {
    let audit_id = parse_id(&id)?;
    let record = state
        .storage
        .get_audit(&audit_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Audit {} not found", id)))?;

    Ok(Json(record))
}

/// Delete a specific audit
pub async fn delete_audit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let audit_id = parse_id(&id)?;
    state.storage.delete_audit(&audit_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every audit
pub async fn clear_audits(State(state): State<AppState>) -> ApiResult<Json<CountResponse>> {
    let count = state.storage.clear_audits().await?;
    info!(count, "audit history cleared");
    Ok(Json(CountResponse { count }))
}

/// Export the history as a JSON attachment
pub async fn export_audits(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let records = state.storage.list_audits().await?;
    let filename = format!(
        "ai-act-audits-{}.json",
        chrono::Utc::now().format("%Y-%m-%d")
    );

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )],
        Json(records),
    ))
}

/// Import an exported history
///
/// Every valid entry is stored as a new record with a fresh id and timestamp.
pub async fn import_audits(
    State(state): State<AppState>,
    Json(document): Json<serde_json::Value>,
) -> ApiResult<Json<CountResponse>> {
    let entries = AuditRecord::parse_import(document)?;
    let count = state.storage.import_audits(entries).await?;
    info!(count, "audit history imported");
    Ok(Json(CountResponse { count }))
}

/// Aggregate stats over the history
pub async fn audit_stats(State(state): State<AppState>) -> ApiResult<Json<AuditStats>> {
    let records = state.storage.list_audits().await?;
    Ok(Json(AuditStats::from_records(&records, chrono::Utc::now())))
}
