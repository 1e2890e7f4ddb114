//! Suspicious term detection handler

use auditor_rules::detect_suspicious_terms;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Term scan request
#[derive(Debug, Deserialize)]
pub struct TermsRequest {
    pub text: String,
    /// Defaults to "en"
    #[serde(default)]
    pub locale: Option<String>,
}

/// Term scan response
#[derive(Debug, Serialize)]
pub struct TermsResponse {
    pub locale: String,
    pub terms: Vec<&'static str>,
}

/// Scan free text for prohibited-practice phrases
pub async fn detect_terms(Json(request): Json<TermsRequest>) -> Json<TermsResponse> {
    let locale = request.locale.unwrap_or_else(|| "en".to_string());
    let terms = detect_suspicious_terms(&request.text, &locale);
    Json(TermsResponse { locale, terms })
}
