//! Like entity <-> model mapper

use blog_core::entities::Like;
use blog_core::error::DomainError;
use blog_core::value_objects::{SessionToken, Slug};

use crate::models::LikeModel;

/// Convert LikeModel to Like entity
///
/// Stored rows were validated on write, but conversion stays fallible so a
/// row touched outside the application surfaces as an internal error rather
/// than a panic.
impl TryFrom<LikeModel> for Like {
    type Error = DomainError;

    fn try_from(model: LikeModel) -> Result<Self, Self::Error> {
        let slug = Slug::parse(&model.slug)
            .map_err(|e| DomainError::InternalError(format!("stored slug invalid: {e}")))?;
        let session = SessionToken::parse(&model.session_id)
            .map_err(|e| DomainError::InternalError(format!("stored session token invalid: {e}")))?;

        Ok(Like {
            slug,
            session,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity() {
        let model = LikeModel {
            slug: "hello-world".to_string(),
            session_id: "abc".to_string(),
            created_at: Utc::now(),
        };
        let like = Like::try_from(model).unwrap();
        assert_eq!(like.slug.as_str(), "hello-world");
        assert_eq!(like.session.as_str(), "abc");
    }

    #[test]
    fn test_corrupt_row_is_internal_error() {
        let model = LikeModel {
            slug: "Not A Slug".to_string(),
            session_id: "abc".to_string(),
            created_at: Utc::now(),
        };
        let err = Like::try_from(model).unwrap_err();
        assert!(matches!(err, DomainError::InternalError(_)));
    }
}
