//! Like service
//!
//! Reads the like state of a content item and flips membership for the
//! caller's session. The toggle is a check-then-act sequence; the store's
//! uniqueness constraint on `(slug, session)` is the backstop for the race
//! between concurrent identical requests, so the service adds no locking.

use blog_core::entities::{Like, LikeAction, LikeState, ToggleOutcome};
use tracing::{info, instrument, warn};

use blog_core::value_objects::{SessionToken, Slug};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the like count and whether the caller has liked the item
    ///
    /// Pure read: the count is derived by counting records for the slug,
    /// never cached or maintained incrementally.
    #[instrument(skip(self, session), fields(slug = %slug))]
    pub async fn get_state(&self, slug: &Slug, session: &SessionToken) -> ServiceResult<LikeState> {
        let count = self.ctx.like_repo().count_for_slug(slug).await?;
        let liked_by_caller = self.ctx.like_repo().find(slug, session).await?.is_some();

        Ok(LikeState {
            count,
            liked_by_caller,
        })
    }

    /// Flip like membership for the caller's session
    ///
    /// Existing record: delete it, report `Unliked`. No record: insert one,
    /// report `Liked`. Both halves tolerate losing the race to a concurrent
    /// identical request: a duplicate insert is absorbed by the store's
    /// constraint and a duplicate delete removes nothing; either way the
    /// pair ends in the target state and the outcome is tagged, not failed.
    #[instrument(skip(self, session), fields(slug = %slug))]
    pub async fn toggle(&self, slug: &Slug, session: &SessionToken) -> ServiceResult<ToggleOutcome> {
        let existing = self.ctx.like_repo().find(slug, session).await?;

        let outcome = if existing.is_some() {
            let removed = self.ctx.like_repo().delete(slug, session).await?;
            if removed {
                ToggleOutcome::new(LikeAction::Unliked)
            } else {
                // Concurrent toggle deleted it first
                ToggleOutcome::already_settled(LikeAction::Unliked)
            }
        } else {
            let like = Like::new(slug.clone(), session.clone());
            let inserted = self.ctx.like_repo().insert(&like).await?;
            if inserted {
                ToggleOutcome::new(LikeAction::Liked)
            } else {
                // Concurrent toggle inserted it first; constraint absorbed ours
                ToggleOutcome::already_settled(LikeAction::Liked)
            }
        };

        if outcome.already_in_target_state {
            warn!(
                slug = %slug,
                action = outcome.action.as_str(),
                "Toggle raced a concurrent request; already in target state"
            );
        } else {
            info!(slug = %slug, action = outcome.action.as_str(), "Like toggled");
        }

        Ok(outcome)
    }
}
