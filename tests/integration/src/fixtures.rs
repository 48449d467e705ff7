//! Test fixtures and response shapes

use serde::Deserialize;
use uuid::Uuid;

/// Generate a slug no other test run has seen, so counts start at zero
pub fn unique_slug() -> String {
    format!("test-post-{}", Uuid::new_v4().simple())
}

/// Body of GET /content/{slug}/likes
#[derive(Debug, Deserialize)]
pub struct LikeStateBody {
    pub count: i64,
    #[serde(rename = "hasLiked")]
    pub has_liked: bool,
}

/// Body of POST /content/{slug}/likes
#[derive(Debug, Deserialize)]
pub struct ToggleBody {
    pub action: String,
    pub liked: bool,
}

/// Error body shared by all failure responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
