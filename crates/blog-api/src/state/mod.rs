//! Application state
//!
//! Holds the shared state for the Axum application including the service
//! context, configuration, and the process-wide rate limiter.

use std::sync::Arc;

use blog_common::AppConfig;
use blog_service::ServiceContext;

use crate::rate_limit::RateLimiter;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// In-memory fixed-window rate limiter (shared, concurrency-safe)
    rate_limiter: RateLimiter,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig, rate_limiter: RateLimiter) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            rate_limiter,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the rate limiter
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("rate_limiter", &"RateLimiter")
            .finish()
    }
}
