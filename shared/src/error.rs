//! Errors raised while checking registration payloads and service responses.

use thiserror::Error;

/// A server-side payload check that failed. `Display` is the message sent
/// back with the 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadViolation {
    /// Body was not a JSON object with the expected fields.
    #[error("Invalid request payload")]
    Malformed,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid ISRC format")]
    InvalidRecordingId,

    #[error("Invalid original link")]
    InvalidOriginalLink,
}

/// A response the service built but refuses to send.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("receipt id is not a UUID: {0}")]
    ReceiptId(String),

    #[error("reference is missing")]
    MissingReference,

    #[error("received timestamp is missing")]
    MissingTimestamp,

    #[error("recording id is not an ISRC: {0}")]
    RecordingId(String),
}
