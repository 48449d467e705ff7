//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::Like;
use crate::error::DomainError;
use crate::value_objects::{SessionToken, Slug};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find the like record for a `(slug, session)` pair
    async fn find(&self, slug: &Slug, session: &SessionToken) -> RepoResult<Option<Like>>;

    /// Count all likes for a content item
    ///
    /// The count is always derived from the relation; no counter column exists.
    async fn count_for_slug(&self, slug: &Slug) -> RepoResult<i64>;

    /// Insert a like record
    ///
    /// Returns `true` when a row was actually written, `false` when the
    /// store's uniqueness constraint absorbed a duplicate insert. The
    /// duplicate case is an expected outcome of concurrent toggles, not
    /// an error.
    async fn insert(&self, like: &Like) -> RepoResult<bool>;

    /// Delete the like record for a `(slug, session)` pair
    ///
    /// Returns `true` when a row was removed, `false` when none existed
    /// (duplicate delete is a no-op).
    async fn delete(&self, slug: &Slug, session: &SessionToken) -> RepoResult<bool>;
}
