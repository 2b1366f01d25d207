pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{routing::get, routing::post, Router};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/recommend", post(handlers::handle_recommend))
        .route(
            "/api/v1/recommend/export",
            post(handlers::handle_export),
        )
        // Roster uploads can exceed the 2 MiB multipart default.
        .layer(DefaultBodyLimit::max(16 * 1024 * 1024))
        .with_state(state)
}
