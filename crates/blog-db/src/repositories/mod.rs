//! PostgreSQL repository implementations

mod error;
mod like;

pub use error::{map_db_error, map_unique_violation};
pub use like::PgLikeRepository;
