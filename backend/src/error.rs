//! Error types for the registration service.
//!
//! - [`CatalogError`] - Original-work lookup errors
//! - [`RegistrationError`] - Submission errors
//! - [`ReceiptError`] - Receipt retrieval errors
//! - [`ConfigError`] - Environment configuration errors
//! - [`ServerError`] - Top-level errors, mapped to HTTP statuses
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::http::StatusCode;
use coverreg_shared::{PayloadViolation, ShapeError};
use thiserror::Error;

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors while looking up an original work.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Recording id failed the ISRC check.
    #[error("Invalid ISRC format")]
    InvalidRecordingId(String),

    /// Upstream metadata service could not be reached or answered non-2xx.
    #[error("Metadata service unavailable: {0}")]
    Upstream(String),

    /// Upstream answered with a body that is not an original work.
    #[error("Invalid metadata response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Registration Errors
// =============================================================================

/// Errors while processing a submission.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The payload failed a validator.
    #[error("{0}")]
    Payload(#[from] PayloadViolation),

    /// The generated response failed its shape check.
    #[error("Response payload validation failed: {0}")]
    Shape(#[from] ShapeError),
}

// =============================================================================
// Receipt Errors
// =============================================================================

/// Errors while fetching a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Receipt id is not a UUID.
    #[error("Receipt ID er ugyldigt.")]
    InvalidId(String),

    /// No receipt with this id.
    #[error("Ingen registrering fundet for det angivne Receipt ID.")]
    NotFound(String),

    /// The stored record failed its shape check.
    #[error("Response payload validation failed: {0}")]
    Shape(#[from] ShapeError),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    #[error("Receipt error: {0}")]
    Receipt(#[from] ReceiptError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// HTTP status reported to the client.
    ///
    /// Input problems are 4xx, failures of the service itself are 5xx.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Catalog(CatalogError::InvalidRecordingId(_)) => StatusCode::BAD_REQUEST,
            ServerError::Catalog(_) => StatusCode::BAD_GATEWAY,
            ServerError::Registration(RegistrationError::Payload(_)) => StatusCode::BAD_REQUEST,
            ServerError::Registration(RegistrationError::Shape(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Receipt(ReceiptError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ServerError::Receipt(ReceiptError::NotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Receipt(ReceiptError::Shape(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Config(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    ///
    /// Shape failures only say that the response was rejected; the detail
    /// goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::Catalog(e) => e.to_string(),
            ServerError::Registration(RegistrationError::Payload(v)) => v.to_string(),
            ServerError::Registration(RegistrationError::Shape(_))
            | ServerError::Receipt(ReceiptError::Shape(_)) => "Response payload validation failed".to_string(),
            ServerError::Receipt(e) => e.to_string(),
            ServerError::Config(_) | ServerError::Io(_) => "Internal server error".to_string(),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Result type for receipt operations.
pub type ReceiptResult<T> = Result<T, ReceiptError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let violation = PayloadViolation::InvalidEmail;
        let server_err: ServerError = RegistrationError::from(violation).into();
        assert_eq!(server_err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(server_err.public_message(), "Invalid email address");

        let shape: ServerError = RegistrationError::from(ShapeError::MissingReference).into();
        assert_eq!(shape.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(shape.public_message(), "Response payload validation failed");
    }

    #[test]
    fn test_receipt_statuses() {
        let invalid: ServerError = ReceiptError::InvalidId("x".into()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.public_message(), "Receipt ID er ugyldigt.");

        let missing: ServerError = ReceiptError::NotFound("x".into()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_catalog_statuses() {
        let invalid: ServerError = CatalogError::InvalidRecordingId("bad".into()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.public_message(), "Invalid ISRC format");

        let upstream: ServerError = CatalogError::Upstream("refused".into()).into();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_config_error_format() {
        let err = ConfigError::InvalidValue {
            key: "COVERREG_PORT",
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("COVERREG_PORT"));
        assert!(msg.contains("abc"));
    }
}
