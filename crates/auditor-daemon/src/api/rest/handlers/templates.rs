//! Sector template handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use auditor_guide::{template, templates, SectorTemplate};
use auditor_types::{AISystemInput, AnalysisResult, Language};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

/// List sector templates, custom last
pub async fn list_templates() -> Json<Vec<SectorTemplate>> {
    Json(templates())
}

/// Get one sector template
pub async fn get_template(Path(id): Path<String>) -> ApiResult<Json<SectorTemplate>> {
    Ok(Json(template(&id)?))
}

/// Preset merged into the posted answers, then classified
#[derive(Debug, Serialize)]
pub struct AppliedTemplateResponse {
    pub id: &'static str,
    pub label: &'static str,
    pub input: AISystemInput,
    pub result: AnalysisResult,
}

/// Merge a template preset into the posted input and classify it
pub async fn apply_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut input): Json<AISystemInput>,
) -> ApiResult<Json<AppliedTemplateResponse>> {
    let template = template(&id)?;
    template.apply(&mut input);
    let result = state.classifier.classify(&input);

    Ok(Json(AppliedTemplateResponse {
        id: template.id,
        label: template.label(Language::resolve(&input.language)),
        input,
        result,
    }))
}
