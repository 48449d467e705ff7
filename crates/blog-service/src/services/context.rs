//! Service context - dependency container for services
//!
//! Holds the repositories and other dependencies needed by services.

use std::sync::Arc;

use blog_core::traits::LikeRepository;
use blog_db::PgPool;

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to the database pool (for health probes) and the
/// repository implementations.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    like_repo: Arc<dyn LikeRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(pool: PgPool, like_repo: Arc<dyn LikeRepository>) -> Self {
        Self { pool, like_repo }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("like_repo", &"LikeRepository")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    like_repo: Option<Arc<dyn LikeRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            like_repo: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.like_repo
                .ok_or_else(|| super::error::ServiceError::validation("like_repo is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
