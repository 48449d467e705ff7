//! Value objects - validated, immutable domain primitives

mod session_token;
mod slug;

pub use session_token::{SessionToken, TokenParseError};
pub use slug::{Slug, SlugParseError};
