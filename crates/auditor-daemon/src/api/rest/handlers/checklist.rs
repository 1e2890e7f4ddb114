//! Compliance checklist handlers

use crate::error::ApiResult;
use auditor_obligations::{checklist, checklist_stats, ChecklistItem, ChecklistStats};
use auditor_types::RiskLevel;
use axum::{extract::Path, Json};
use serde::Serialize;

/// Checklist for one tier
#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub risk_level: RiskLevel,
    pub items: &'static [ChecklistItem],
}

/// Get the checklist of a risk tier
pub async fn get_checklist(Path(level): Path<String>) -> ApiResult<Json<ChecklistResponse>> {
    let risk_level: RiskLevel = level.parse()?;
    Ok(Json(ChecklistResponse {
        risk_level,
        items: checklist(risk_level),
    }))
}

/// Get checklist stats of a risk tier
pub async fn get_checklist_stats(Path(level): Path<String>) -> ApiResult<Json<ChecklistStats>> {
    let risk_level: RiskLevel = level.parse()?;
    Ok(Json(checklist_stats(risk_level)))
}
