//! Session token - opaque per-client identity for like uniqueness
//!
//! The token is the sole principal for the one-like-per-client invariant.
//! It is deliberately not an authentication credential: clearing the cookie
//! resets a client's like state, which is an accepted limitation.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum accepted token length (a UUID is 36 characters; leave headroom
/// for tokens issued by earlier deployments)
const MAX_TOKEN_LEN: usize = 128;

/// Opaque, client-persisted session identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh, globally unique token (UUID v4, 128 bits of randomness)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accept a previously issued token from a client
    ///
    /// Tokens are opaque: any printable ASCII string within the length bound
    /// is taken as-is, so tokens survive format changes across deployments.
    pub fn parse(s: &str) -> Result<Self, TokenParseError> {
        if s.is_empty() {
            return Err(TokenParseError::Empty);
        }
        if s.len() > MAX_TOKEN_LEN {
            return Err(TokenParseError::TooLong { max: MAX_TOKEN_LEN });
        }
        if !s.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(TokenParseError::InvalidCharacter);
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the token as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a SessionToken from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenParseError {
    #[error("session token must not be empty")]
    Empty,

    #[error("session token too long: max {max} characters")]
    TooLong { max: usize },

    #[error("session token contains invalid characters")]
    InvalidCharacter,
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SessionToken {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionToken::parse(s)
    }
}

impl TryFrom<String> for SessionToken {
    type Error = TokenParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SessionToken::parse(&s)
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}
