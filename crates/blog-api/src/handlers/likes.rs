//! Like endpoints
//!
//! GET reads the like state for the calling session; POST flips it. Both
//! resolve the caller's session cookie, minting one when absent, so the
//! first visit to either endpoint establishes an identity. POST is rate
//! limited per client address before anything else happens.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;
use blog_core::Slug;
use blog_service::dto::{LikeStateResponse, ToggleResponse};
use blog_service::LikeService;
use tracing::{debug, instrument, warn};

use crate::extractors::{resolve_session, ClientIp};
use crate::response::{ApiError, ApiResult, RateLimitHeaders};
use crate::state::AppState;

/// GET /content/{slug}/likes
///
/// Reads never consume rate-limit budget.
#[instrument(skip(state, jar))]
pub async fn get_likes(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    jar: CookieJar,
) -> ApiResult<impl IntoResponse> {
    let slug = Slug::parse(&slug)?;

    let secure = state.config().app.env.is_production();
    let (session, jar) = resolve_session(&state.config().session, secure, jar);

    let like_state = LikeService::new(state.service_context())
        .get_state(&slug, &session.token)
        .await?;

    Ok((jar, Json(LikeStateResponse::from(like_state))))
}

/// POST /content/{slug}/likes
///
/// The admission check runs first: a rejected request gets a 429 without
/// touching the session or the store, and without consuming a cookie.
#[instrument(skip(state, jar), fields(client = %client_ip))]
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    client_ip: ClientIp,
    jar: CookieJar,
) -> ApiResult<impl IntoResponse> {
    let decision = state.rate_limiter().check(client_ip.as_str());
    if !decision.admitted {
        warn!(client = %client_ip, "Like toggle rejected by rate limiter");
        return Err(ApiError::RateLimited {
            limit: state.rate_limiter().max_requests(),
            reset_after: decision.reset_after,
        });
    }

    let slug = Slug::parse(&slug)?;

    let secure = state.config().app.env.is_production();
    let (session, jar) = resolve_session(&state.config().session, secure, jar);
    if session.is_new {
        debug!("Minted session for first-time caller");
    }

    let outcome = LikeService::new(state.service_context())
        .toggle(&slug, &session.token)
        .await?;

    let headers = RateLimitHeaders {
        limit: state.rate_limiter().max_requests(),
        remaining: decision.remaining,
        reset_after: decision.reset_after,
    };

    Ok((jar, headers, Json(ToggleResponse::from(outcome))))
}
