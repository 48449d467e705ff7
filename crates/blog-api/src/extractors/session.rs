//! Anonymous session resolution
//!
//! Callers are identified by an opaque, long-lived cookie rather than an
//! account. The token carries no claims and is never trusted for anything
//! beyond distinguishing one browser from another.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use blog_common::SessionConfig;
use blog_core::SessionToken;
use tracing::debug;

/// Session identity for the current request
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    /// The opaque session token
    pub token: SessionToken,
    /// Whether the token was minted for this request
    pub is_new: bool,
}

/// Resolve the caller's session from the cookie jar
///
/// Reuses a valid existing cookie, otherwise mints a fresh token and adds
/// a set-cookie to the returned jar. A malformed cookie value is treated
/// as absent and silently replaced.
pub fn resolve_session(
    config: &SessionConfig,
    secure: bool,
    jar: CookieJar,
) -> (ResolvedSession, CookieJar) {
    if let Some(cookie) = jar.get(&config.cookie_name) {
        match SessionToken::parse(cookie.value()) {
            Ok(token) => {
                return (
                    ResolvedSession {
                        token,
                        is_new: false,
                    },
                    jar,
                );
            }
            Err(e) => {
                debug!(error = %e, "Replacing malformed session cookie");
            }
        }
    }

    let token = SessionToken::generate();
    let jar = jar.add(issue_cookie(config, secure, &token));
    (
        ResolvedSession {
            token,
            is_new: true,
        },
        jar,
    )
}

/// Build the session set-cookie
///
/// Http-only and SameSite=Lax so the token survives top-level navigation
/// but stays out of reach of scripts and cross-site POSTs. `secure` is
/// driven by the deployment environment, not hardcoded, so local
/// plain-HTTP development still works.
fn issue_cookie(config: &SessionConfig, secure: bool, token: &SessionToken) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token.as_str().to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(config.max_age_secs))
        .build()
}
