//! HTTP response types
//!
//! Maps layered errors onto HTTP responses and carries rate-limit budget
//! headers alongside successful responses.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, IntoResponseParts, Response, ResponseParts};
use axum::Json;
use blog_common::{AppError, ErrorResponse};
use blog_core::{DomainError, SlugParseError};
use blog_service::ServiceError;
use tracing::error;

pub const HEADER_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
pub const HEADER_RATELIMIT_REMAINING: HeaderName =
    HeaderName::from_static("x-ratelimit-remaining");
pub const HEADER_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// API layer error type
///
/// Terminal error type: every failure a handler can produce converges here
/// and becomes an HTTP response with an `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// Service layer failure
    Service(ServiceError),

    /// Application failure
    App(AppError),

    /// Malformed path segment (bad slug)
    InvalidPath(String),

    /// Caller exceeded the request budget
    RateLimited { limit: u32, reset_after: Duration },

    /// Anything else
    Internal(anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => from_u16(e.status_code()),
            Self::App(e) => from_u16(e.status_code()),
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe message; server-side detail stays in the logs
    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            return "Internal server error".to_string();
        }
        match self {
            Self::Service(e) => e.to_string(),
            Self::App(e) => ErrorResponse::from(e).error,
            Self::InvalidPath(msg) => msg.clone(),
            Self::RateLimited { .. } => "Too many requests, please try again later".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

fn from_u16(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            match &self {
                Self::Service(e) => error!(error = %e, "Request failed"),
                Self::App(e) => error!(error = %e, "Request failed"),
                Self::Internal(e) => error!(error = %e, "Request failed"),
                _ => {}
            }
        }

        let body = Json(ErrorResponse::new(self.public_message()));

        if let Self::RateLimited { limit, reset_after } = &self {
            let retry_after = reset_after.as_secs().max(1);
            return (
                status,
                [(axum::http::header::RETRY_AFTER, retry_after.to_string())],
                RateLimitHeaders {
                    limit: *limit,
                    remaining: 0,
                    reset_after: *reset_after,
                },
                body,
            )
                .into_response();
        }

        (status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Service(ServiceError::Domain(err))
    }
}

impl From<SlugParseError> for ApiError {
    fn from(err: SlugParseError) -> Self {
        Self::InvalidPath(format!("Invalid content identifier: {err}"))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Rate-limit budget headers attached to admitted mutating responses
#[derive(Debug, Clone, Copy)]
pub struct RateLimitHeaders {
    pub limit: u32,
    pub remaining: u32,
    pub reset_after: Duration,
}

impl IntoResponseParts for RateLimitHeaders {
    type Error = std::convert::Infallible;

    fn into_response_parts(self, mut parts: ResponseParts) -> Result<ResponseParts, Self::Error> {
        // Reset is reported in whole seconds, rounded up so a client that
        // waits the advertised time is guaranteed a fresh window
        let reset_secs = self.reset_after.as_secs_f64().ceil() as u64;
        let headers = parts.headers_mut();
        headers.insert(HEADER_RATELIMIT_LIMIT, int_value(u64::from(self.limit)));
        headers.insert(
            HEADER_RATELIMIT_REMAINING,
            int_value(u64::from(self.remaining)),
        );
        headers.insert(HEADER_RATELIMIT_RESET, int_value(reset_secs));
        Ok(parts)
    }
}

fn int_value(n: u64) -> HeaderValue {
    HeaderValue::from_str(&n.to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("0"))
}
