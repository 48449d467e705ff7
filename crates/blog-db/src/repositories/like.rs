//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Like;
use blog_core::traits::{LikeRepository, RepoResult};
use blog_core::value_objects::{SessionToken, Slug};

use crate::models::LikeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find(&self, slug: &Slug, session: &SessionToken) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r#"
            SELECT slug, session_id, created_at
            FROM likes
            WHERE slug = $1 AND session_id = $2
            "#,
        )
        .bind(slug.as_str())
        .bind(session.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Like::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn count_for_slug(&self, slug: &Slug) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM likes WHERE slug = $1
            "#,
        )
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, like), fields(slug = %like.slug))]
    async fn insert(&self, like: &Like) -> RepoResult<bool> {
        // ON CONFLICT DO NOTHING converts a lost check-then-act race into a
        // zero-row insert; rows_affected tells the service which case it hit.
        // map_unique_violation stays as a belt for stores where the conflict
        // clause is absent.
        let result = sqlx::query(
            r#"
            INSERT INTO likes (slug, session_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (slug, session_id) DO NOTHING
            "#,
        )
        .bind(like.slug.as_str())
        .bind(like.session.as_str())
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || blog_core::DomainError::LikeAlreadyExists))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, slug: &Slug, session: &SessionToken) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM likes WHERE slug = $1 AND session_id = $2
            "#,
        )
        .bind(slug.as_str())
        .bind(session.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
