//! HTTP API module.
//!
//! This module provides the HTTP server, response helpers and the service
//! log stream of the registration backend.

pub mod server;
pub mod types;
pub mod logs;

pub use server::{build_router, start_server, AppState};
pub use types::*;
pub use logs::*;
