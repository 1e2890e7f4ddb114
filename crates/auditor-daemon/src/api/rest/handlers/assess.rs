//! Classification handler

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use auditor_rules::detect_in_input;
use auditor_types::{AISystemInput, AnalysisResult};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Query options for `POST /assess`
#[derive(Debug, Default, Deserialize)]
pub struct AssessQuery {
    /// Also store the result in the audit history
    #[serde(default)]
    pub save: bool,
}

/// Classification result plus advisory term warnings
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// Suspicious phrases found in the free text. Advisory unless escalation is on.
    pub suspicious_terms: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_id: Option<Uuid>,
}

/// Classify an AI system description
pub async fn assess(
    State(state): State<AppState>,
    Query(query): Query<AssessQuery>,
    Json(input): Json<AISystemInput>,
) -> ApiResult<Json<AssessResponse>> {
    let result = state.classifier.classify(&input);
    let suspicious_terms = detect_in_input(&input);

    let audit_id = if query.save {
        let record = state.storage.save_audit(input, result.clone()).await?;
        Some(record.id)
    } else {
        None
    };

    info!(
        level = %result.risk_level,
        score = result.risk_score,
        matches = result.matched_rules.len(),
        terms = suspicious_terms.len(),
        saved = audit_id.is_some(),
        "assessment completed"
    );

    Ok(Json(AssessResponse {
        result,
        suspicious_terms,
        audit_id,
    }))
}
