//! Questionnaire validation handler

use auditor_types::{validation::validate_all, AISystemInput, ValidationReport};
use axum::Json;

/// Per-step completeness of a questionnaire. Never blocks classification.
pub async fn validate_input(Json(input): Json<AISystemInput>) -> Json<ValidationReport> {
    Json(validate_all(&input))
}
