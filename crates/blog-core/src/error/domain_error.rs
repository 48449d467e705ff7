//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{SlugParseError, TokenParseError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugParseError),

    #[error("Invalid session token: {0}")]
    InvalidSessionToken(#[from] TokenParseError),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Like already exists")]
    LikeAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSlug(_) => "INVALID_SLUG",
            Self::InvalidSessionToken(_) => "INVALID_SESSION_TOKEN",
            Self::LikeAlreadyExists => "LIKE_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSlug(_) | Self::InvalidSessionToken(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::LikeAlreadyExists)
    }

    /// Check if this is an infrastructure failure
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
