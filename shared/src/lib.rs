//! # Cover registration - shared types
//!
//! Validators and wire models used on both sides of the cover-song
//! registration flow. The crate has no I/O and compiles for `wasm32` as
//! well as native targets.
//!
//! ## Modules
//!
//! - [`validators`] - ISRC, e-mail, URL and receipt-id syntax checks
//! - [`models`] - Registration form, original work, submission response, receipt
//! - [`error`] - Payload violations and response shape errors
//! - [`routes`] - Endpoint and page paths

pub mod error;
pub mod models;
pub mod routes;
pub mod validators;

pub use error::{PayloadViolation, ShapeError};
pub use models::{ErrorBody, Field, OriginalWork, Receipt, RegistrationForm, SubmissionResponse};
pub use routes::{lookup_path, receipt_path, REGISTER_PATH};
pub use validators::{is_valid_email, is_valid_receipt_id, is_valid_recording_id, is_valid_url};
