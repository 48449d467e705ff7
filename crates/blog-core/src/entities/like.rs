//! Like entity - membership of a session in the like relation for a content item

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{SessionToken, Slug};

/// Like entity
///
/// A row in the like relation. Each `(slug, session)` pair exists at most
/// once; the persistent store enforces the uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub slug: Slug,
    pub session: SessionToken,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like stamped with the current time
    pub fn new(slug: Slug, session: SessionToken) -> Self {
        Self {
            slug,
            session,
            created_at: Utc::now(),
        }
    }
}

/// Current like state of a content item, as seen by one caller
///
/// The count is always derived from the relation, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub count: i64,
    pub liked_by_caller: bool,
}

/// Direction a toggle resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    Liked,
    Unliked,
}

impl LikeAction {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Liked => "liked",
            Self::Unliked => "unliked",
        }
    }

    /// Whether the pair is in the liked state after the toggle
    #[inline]
    pub fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }
}

/// Result of a toggle operation
///
/// `already_in_target_state` is set when a concurrent identical request won
/// the check-then-act race: the store's uniqueness constraint absorbed our
/// duplicate insert (or our delete removed nothing). The outcome is still
/// reported as the target state, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub action: LikeAction,
    pub already_in_target_state: bool,
}

impl ToggleOutcome {
    pub fn new(action: LikeAction) -> Self {
        Self {
            action,
            already_in_target_state: false,
        }
    }

    pub fn already_settled(action: LikeAction) -> Self {
        Self {
            action,
            already_in_target_state: true,
        }
    }
}
