//! Slug - URL-safe identifier for a content item (blog post or project)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted slug length
const MAX_SLUG_LEN: usize = 200;

/// URL-safe content identifier
///
/// Slugs are validated on construction: non-empty, at most 200 characters,
/// lowercase ASCII alphanumerics plus `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Parse and validate a slug from a string
    pub fn parse(s: &str) -> Result<Self, SlugParseError> {
        if s.is_empty() {
            return Err(SlugParseError::Empty);
        }
        if s.len() > MAX_SLUG_LEN {
            return Err(SlugParseError::TooLong { max: MAX_SLUG_LEN });
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
        {
            return Err(SlugParseError::InvalidCharacter);
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the slug as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a Slug from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlugParseError {
    #[error("slug must not be empty")]
    Empty,

    #[error("slug too long: max {max} characters")]
    TooLong { max: usize },

    #[error("slug may only contain lowercase alphanumerics, '-' and '_'")]
    InvalidCharacter,
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slug::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Slug::parse(&s)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}
