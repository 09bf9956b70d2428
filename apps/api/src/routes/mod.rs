pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Parsing
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_resume))
        .route("/api/v1/jobs/parse", post(handlers::handle_parse_job))
        // Analysis
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        .route(
            "/api/v1/analysis/batch",
            post(handlers::handle_batch_analyze),
        )
        // Configuration
        .route("/api/v1/weights", get(handlers::handle_get_weights))
        .route(
            "/api/v1/taxonomy/:skill",
            get(handlers::handle_related_skills),
        )
        .with_state(state)
}
