pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::cv::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-cv", post(handlers::handle_generate_cv))
        .route("/api/tailor-cv", post(handlers::handle_tailor_cv))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
