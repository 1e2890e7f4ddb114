//! HTTP surface of the auditor daemon.

use auditor_daemon::{create_router, AppState, DaemonConfig};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn app_with(config: DaemonConfig) -> Router {
    let state = AppState::from_config(&config).unwrap();
    create_router(state, &config.server)
}

fn app() -> Router {
    app_with(DaemonConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn chatbot() -> Value {
    json!({
        "name": "Customer Support Bot",
        "description": "Customer service chatbot powered by GPT to answer questions",
        "intended_purpose": "Provide automated customer support",
        "domain": "Customer Service",
        "is_gen_ai": true
    })
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_version() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn status_reports_engine_shape() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["rules"], 16);
    assert_eq!(body["stats"]["stored_audits"], 0);
    assert_eq!(body["stats"]["escalate_suspicious_terms"], false);
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn assess_classifies_without_saving() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/v1/assess", Some(chatbot())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_level"], "Limited Risk");
    assert_eq!(body["matched_rules"][0]["rule_id"], "ART50_1");
    assert!(body.get("audit_id").is_none());

    let (_, audits) = send(&app, Method::GET, "/api/v1/audits", None).await;
    assert_eq!(audits, json!([]));
}

#[tokio::test]
async fn assess_with_save_stores_record() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/v1/assess?save=true", Some(chatbot())).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["audit_id"].as_str().unwrap().to_string();

    let (status, record) = send(&app, Method::GET, &format!("/api/v1/audits/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["input"]["name"], "Customer Support Bot");
    assert_eq!(record["result"]["risk_level"], "Limited Risk");
}

#[tokio::test]
async fn null_fields_are_treated_as_unset() {
    let input = json!({
        "name": "Support Bot",
        "description": "Chatbot answering customer questions",
        "intended_purpose": "Customer support",
        "domain": null,
        "content_types": null,
        "data_types": null,
        "is_gen_ai": true
    });
    let (status, body) = send(&app(), Method::POST, "/api/v1/assess", Some(input)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_level"], "Limited Risk");
}

#[tokio::test]
async fn suspicious_terms_are_advisory() {
    let input = json!({
        "name": "Citizen Rater",
        "description": "Social scoring of citizens based on behaviour",
        "intended_purpose": "Rank residents"
    });
    let (_, body) = send(&app(), Method::POST, "/api/v1/assess", Some(input.clone())).await;
    assert_eq!(body["risk_level"], "Minimal Risk");
    assert_eq!(body["suspicious_terms"], json!(["social scoring"]));

    let mut config = DaemonConfig::default();
    config.engine.escalate_suspicious_terms = true;
    let (_, body) = send(&app_with(config), Method::POST, "/api/v1/assess", Some(input)).await;
    assert_eq!(body["risk_level"], "Prohibited");
    assert_eq!(body["matched_rules"][0]["rule_id"], "ART5_TERMS");
}

#[tokio::test]
async fn terms_endpoint_uses_locale() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/v1/terms",
        Some(json!({"text": "Ce système utilise la notation sociale", "locale": "fr"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["terms"], json!(["notation sociale"]));

    let (_, body) = send(
        &app(),
        Method::POST,
        "/api/v1/terms",
        Some(json!({"text": "social scoring", "locale": "de"})),
    )
    .await;
    assert_eq!(body["terms"], json!([]));
}

#[tokio::test]
async fn validate_reports_steps() {
    let (status, body) = send(&app(), Method::POST, "/api/v1/validate", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_all_valid"], false);
    assert_eq!(body["context"]["is_valid"], true);
}

// ---------------------------------------------------------------------------
// Checklists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn checklist_by_lenient_level() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/checklist/high", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_level"], "High Risk");
    assert_eq!(body["items"].as_array().unwrap().len(), 15);

    let (status, body) = send(&app(), Method::GET, "/api/v1/checklist/prohibited/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 4);
}

#[tokio::test]
async fn unknown_level_is_bad_request() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/checklist/extreme", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Guided entry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tree_starts_at_root() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/guide/tree", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["root"], "manipulation");

    let (status, body) = send(&app(), Method::POST, "/api/v1/guide/walk", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["position"]["kind"], "question");
    assert_eq!(body["question"]["id"], "manipulation");
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn finished_walk_is_confirmed_by_engine() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/v1/guide/walk",
        Some(json!({"answers": ["yes"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["position"]["kind"], "outcome");
    assert_eq!(body["suggestion"]["risk_level"], "Prohibited");
    assert_eq!(body["result"]["risk_level"], "Prohibited");
}

#[tokio::test]
async fn answering_a_finished_walk_is_rejected() {
    let (status, _) = send(
        &app(),
        Method::POST,
        "/api/v1/guide/walk",
        Some(json!({"answers": ["yes", "no"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn templates_listed_and_fetched() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/templates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 8);

    let (status, body) = send(&app(), Method::GET, "/api/v1/templates/cv_screening", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["expected_level"], "High Risk");

    let (status, _) = send(&app(), Method::GET, "/api/v1/templates/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn template_applied_to_posted_input() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/v1/templates/customer_chatbot/apply",
        Some(json!({"name": "Bot", "language": "fr", "biometrics": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Chatbot Client");
    assert_eq!(body["input"]["name"], "Bot");
    assert_eq!(body["input"]["is_gen_ai"], true);
    assert_eq!(body["input"]["domain"], "Customer Service");
    assert_eq!(body["result"]["risk_level"], "High Risk");

    let (status, _) = send(
        &app(),
        Method::POST,
        "/api/v1/templates/nope/apply",
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Audit history
// ---------------------------------------------------------------------------

#[tokio::test]
async fn audit_lifecycle() {
    let app = app();

    let (status, record) = send(
        &app,
        Method::POST,
        "/api/v1/audits",
        Some(json!({"input": {"domain": "Retail", "biometrics": true}})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["result"]["risk_level"], "High Risk");
    let id = record["id"].as_str().unwrap().to_string();

    let (_, stats) = send(&app, Method::GET, "/api/v1/audits/stats", None).await;
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["by_domain"]["Retail"], 1);
    assert_eq!(stats["recent_count"], 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/audits/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/audits/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    let (status, _) = send(&app, Method::GET, &format!("/api/v1/audits/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/v1/audits/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_then_import_gives_new_ids() {
    let source = app();
    send(&source, Method::POST, "/api/v1/assess?save=true", Some(chatbot())).await;
    let (status, exported) = send(&source, Method::GET, "/api/v1/audits/export", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exported.as_array().unwrap().len(), 1);

    let target = app();
    let mut document = exported.clone();
    document
        .as_array_mut()
        .unwrap()
        .push(json!({"input": {"name": "broken"}}));
    let (status, body) = send(&target, Method::POST, "/api/v1/audits/import", Some(document)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (_, imported) = send(&target, Method::GET, "/api/v1/audits", None).await;
    assert_ne!(imported[0]["id"], exported[0]["id"]);
    assert_eq!(imported[0]["input"], exported[0]["input"]);

    let (status, _) = send(&target, Method::POST, "/api/v1/audits/import", Some(json!(42))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn history_is_bounded() {
    let mut config = DaemonConfig::default();
    config.history.max_records = 2;
    let app = app_with(config);
    for _ in 0..3 {
        send(&app, Method::POST, "/api/v1/assess?save=true", Some(chatbot())).await;
    }
    let (_, audits) = send(&app, Method::GET, "/api/v1/audits", None).await;
    assert_eq!(audits.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::DELETE, "/api/v1/audits", None).await;
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn cors_follows_config() {
    let request = || {
        Request::builder()
            .uri("/api/v1/health")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap()
    };

    let response = app().oneshot(request()).await.unwrap();
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let mut config = DaemonConfig::default();
    config.server.enable_cors = false;
    let response = app_with(config).oneshot(request()).await.unwrap();
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
