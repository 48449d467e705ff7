//! Database models - SQLx-compatible structs for PostgreSQL tables

mod like;

pub use like::LikeModel;
