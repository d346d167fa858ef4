pub mod health;
pub mod json;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ai/chat", post(handlers::handle_chat))
        .route(
            "/api/ai/analyze-resume",
            post(handlers::handle_analyze_resume),
        )
        .route(
            "/api/ai/enhance-resume",
            post(handlers::handle_enhance_resume),
        )
        .route(
            "/api/ai/generate-cover-letter",
            post(handlers::handle_generate_cover_letter),
        )
        .route(
            "/api/ai/extract-job-skills",
            post(handlers::handle_extract_job_skills),
        )
        .with_state(state)
}
