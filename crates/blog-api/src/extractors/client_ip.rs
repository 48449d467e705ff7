//! Client IP extraction from proxy headers
//!
//! The server runs behind a reverse proxy, so the peer address of the TCP
//! connection is the proxy, not the client. The real client address is
//! recovered from forwarding headers in precedence order.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

/// Fallback identity when no forwarding header is present
///
/// All unidentifiable clients share one rate limit bucket rather than
/// bypassing the limiter entirely.
const UNKNOWN_CLIENT: &str = "unknown";

/// Client network identity, resolved from proxy headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl ClientIp {
    /// Resolve the client address from request headers
    ///
    /// Precedence: `cf-connecting-ip`, then `x-real-ip`, then the first
    /// entry of `x-forwarded-for`. Headers set by the proxy closest to the
    /// client win over ones an upstream may have appended to.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let ip = header_value(headers, "cf-connecting-ip")
            .or_else(|| header_value(headers, "x-real-ip"))
            .or_else(|| {
                header_value(headers, "x-forwarded-for")
                    .and_then(|list| list.split(',').next().map(|s| s.trim().to_owned()))
            })
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_owned());
        Self(ip)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

impl std::fmt::Display for ClientIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
