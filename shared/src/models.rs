//! Wire models exchanged between the frontend and the backend.
//!
//! All structures serialize with camelCase keys, matching the JSON bodies of
//! the `/lookup`, `/register` and `/receipt` endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PayloadViolation, ShapeError};
use crate::validators::{is_valid_email, is_valid_receipt_id, is_valid_recording_id, is_valid_url};

// =============================================================================
// Registration Form
// =============================================================================

/// Name of a user-editable field of [`RegistrationForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ContactName,
    ContactEmail,
    RecordingId,
    ArtistName,
    OriginalLink,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::ContactName,
        Field::ContactEmail,
        Field::RecordingId,
        Field::ArtistName,
        Field::OriginalLink,
    ];

    /// JSON key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ContactName => "contactName",
            Field::ContactEmail => "contactEmail",
            Field::RecordingId => "recordingId",
            Field::ArtistName => "artistName",
            Field::OriginalLink => "originalLink",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cover-song registration as entered by the user.
///
/// `original_link` is optional on the wire and defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub contact_name: String,
    pub contact_email: String,
    pub recording_id: String,
    pub artist_name: String,
    #[serde(default)]
    pub original_link: String,
}

impl RegistrationForm {
    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ContactName => &self.contact_name,
            Field::ContactEmail => &self.contact_email,
            Field::RecordingId => &self.recording_id,
            Field::ArtistName => &self.artist_name,
            Field::OriginalLink => &self.original_link,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ContactName => &mut self.contact_name,
            Field::ContactEmail => &mut self.contact_email,
            Field::RecordingId => &mut self.recording_id,
            Field::ArtistName => &mut self.artist_name,
            Field::OriginalLink => &mut self.original_link,
        };
        *slot = value.into();
    }

    /// Server-side payload checks, in field order. Returns the first violation.
    ///
    /// Names are free text; only the e-mail, the ISRC and a non-empty original
    /// link are checked for syntax.
    pub fn first_violation(&self) -> Option<PayloadViolation> {
        if !is_valid_email(&self.contact_email) {
            return Some(PayloadViolation::InvalidEmail);
        }
        if !is_valid_recording_id(&self.recording_id) {
            return Some(PayloadViolation::InvalidRecordingId);
        }
        let link = self.original_link.trim();
        if !link.is_empty() && !is_valid_url(link) {
            return Some(PayloadViolation::InvalidOriginalLink);
        }
        None
    }
}

// =============================================================================
// Original Work
// =============================================================================

/// Descriptive metadata for the composition a recording is based on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalWork {
    pub title: String,
    pub work_number: String,
    pub composers: Vec<String>,
    pub arranger: String,
    pub lyricist: String,
}

impl OriginalWork {
    /// Composers as a single comma-separated line.
    pub fn composers_line(&self) -> String {
        self.composers.join(", ")
    }
}

// =============================================================================
// Submission and Receipt
// =============================================================================

/// Answer of `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub reference: String,
    pub received_at: String,
    pub receipt_id: String,
}

impl SubmissionResponse {
    /// Verify the response is well-formed before it leaves the service.
    pub fn check_shape(&self) -> Result<(), ShapeError> {
        check_common_shape(&self.receipt_id, &self.reference, &self.received_at)
    }
}

/// Durable confirmation of a registration, shown on the receipt page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub receipt_id: String,
    pub contact_name: String,
    pub contact_email: String,
    pub recording_id: String,
    pub artist_name: String,
    pub original_link: String,
    pub reference: String,
    pub received_at: String,
}

impl Receipt {
    /// Verify the record is well-formed before it leaves the service.
    pub fn check_shape(&self) -> Result<(), ShapeError> {
        check_common_shape(&self.receipt_id, &self.reference, &self.received_at)?;
        if !is_valid_recording_id(&self.recording_id) {
            return Err(ShapeError::RecordingId(self.recording_id.clone()));
        }
        Ok(())
    }
}

fn check_common_shape(receipt_id: &str, reference: &str, received_at: &str) -> Result<(), ShapeError> {
    if !is_valid_receipt_id(receipt_id) {
        return Err(ShapeError::ReceiptId(receipt_id.to_string()));
    }
    if reference.trim().is_empty() {
        return Err(ShapeError::MissingReference);
    }
    if received_at.trim().is_empty() {
        return Err(ShapeError::MissingTimestamp);
    }
    Ok(())
}

/// JSON body of every non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
