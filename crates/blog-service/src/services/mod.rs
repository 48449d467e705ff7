//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod like;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
