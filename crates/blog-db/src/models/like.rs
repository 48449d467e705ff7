//! Like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub slug: String,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}
