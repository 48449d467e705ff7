//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names
//! match what the site's frontend already consumes.

use blog_core::entities::{LikeAction, LikeState, ToggleOutcome};
use serde::Serialize;

/// Like state of a content item, as seen by the calling session
///
/// GET /content/{slug}/likes
#[derive(Debug, Clone, Serialize)]
pub struct LikeStateResponse {
    pub count: i64,
    #[serde(rename = "hasLiked")]
    pub has_liked: bool,
}

impl From<LikeState> for LikeStateResponse {
    fn from(state: LikeState) -> Self {
        Self {
            count: state.count,
            has_liked: state.liked_by_caller,
        }
    }
}

/// Result of a like toggle
///
/// POST /content/{slug}/likes
#[derive(Debug, Clone, Serialize)]
pub struct ToggleResponse {
    pub action: LikeAction,
    pub liked: bool,
}

impl From<ToggleOutcome> for ToggleResponse {
    fn from(outcome: ToggleOutcome) -> Self {
        Self {
            action: outcome.action,
            liked: outcome.action.is_liked(),
        }
    }
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
