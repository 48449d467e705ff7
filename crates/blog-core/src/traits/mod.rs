//! Repository traits (ports)

mod repositories;

pub use repositories::{LikeRepository, RepoResult};
