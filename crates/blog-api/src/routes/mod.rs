//! Route definitions

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{health, likes};
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new().merge(like_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Like routes
fn like_routes() -> Router<AppState> {
    Router::new()
        .route("/content/:slug/likes", get(likes::get_likes))
        .route("/content/:slug/likes", post(likes::toggle_like))
}
