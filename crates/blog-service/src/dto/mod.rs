//! Data transfer objects

mod responses;

pub use responses::{HealthResponse, LikeStateResponse, ReadinessResponse, ToggleResponse};
