//! Domain entities

mod like;

pub use like::{Like, LikeAction, LikeState, ToggleOutcome};
