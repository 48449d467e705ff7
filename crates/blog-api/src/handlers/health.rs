//! Health check handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use blog_service::dto::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// GET /health
///
/// Liveness only; answers as long as the process is serving requests.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /health/ready
///
/// Readiness: verifies a database connection can be acquired. Returns 503
/// when the store is unreachable so load balancers drain this instance.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let database = match state.service_context().pool().acquire().await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Readiness check failed to reach database");
            false
        }
    };

    let status = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(ReadinessResponse::ready(database)))
}
