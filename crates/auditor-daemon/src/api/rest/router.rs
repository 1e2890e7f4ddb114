//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        // Health and status
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::daemon_status))
        // Classification
        .route("/assess", post(handlers::assess))
        .route("/terms", post(handlers::detect_terms))
        .route("/validate", post(handlers::validate_input))
        // Checklists
        .route("/checklist/:level", get(handlers::get_checklist))
        .route("/checklist/:level/stats", get(handlers::get_checklist_stats))
        // Guided entry
        .route("/guide/tree", get(handlers::get_tree))
        .route("/guide/walk", post(handlers::walk_tree))
        .route("/templates", get(handlers::list_templates))
        .route("/templates/:id", get(handlers::get_template))
        .route("/templates/:id/apply", post(handlers::apply_template))
        // Audit history
        .route(
            "/audits",
            get(handlers::list_audits)
                .post(handlers::create_audit)
                .delete(handlers::clear_audits),
        )
        .route("/audits/export", get(handlers::export_audits))
        .route("/audits/import", post(handlers::import_audits))
        .route("/audits/stats", get(handlers::audit_stats))
        .route(
            "/audits/:id",
            get(handlers::get_audit).delete(handlers::delete_audit),
        );

    // Build router with middleware
    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
