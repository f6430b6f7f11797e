//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Error Types** - Frontend error handling

use std::fmt;

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all backend calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Request could not be built or sent.
    Network(String),
    /// Backend answered with a non-success status.
    Status { status: u16, message: String },
    /// Response body did not match the expected shape.
    Decode(String),
    /// Input rejected before any request was made.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Status { status, message } => write!(f, "Server error ({}): {}", status, message),
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
