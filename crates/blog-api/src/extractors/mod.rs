//! Request extractors
//!
//! Pulls the client's network identity and session cookie out of incoming
//! requests before handlers run.

pub mod client_ip;
pub mod session;

pub use client_ip::ClientIp;
pub use session::{resolve_session, ResolvedSession};
