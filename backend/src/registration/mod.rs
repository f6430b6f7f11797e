//! Registration intake.
//!
//! Checks a submitted [`RegistrationForm`] and issues the identifiers the
//! client later shows to the user: a human-readable reference
//! (`NMP-` followed by six digits), a receipt id (UUID v4) and the time the
//! registration was received.

use chrono::{SecondsFormat, Utc};
use coverreg_shared::{RegistrationForm, SubmissionResponse};
use rand::Rng;
use uuid::Uuid;

use crate::error::RegistrationResult;

/// Prefix of every registration reference.
pub const REFERENCE_PREFIX: &str = "NMP-";

/// Generate a reference code: the prefix followed by six random decimal digits.
pub fn generate_reference<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: u32 = rng.gen_range(100_000..1_000_000);
    format!("{}{}", REFERENCE_PREFIX, suffix)
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision.
pub fn received_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Validate a submission and build its response.
///
/// The response is shape-checked before it is returned so that a broken
/// generator surfaces as a server error instead of a malformed 200.
pub fn register(form: &RegistrationForm) -> RegistrationResult<SubmissionResponse> {
    if let Some(violation) = form.first_violation() {
        return Err(violation.into());
    }

    let response = SubmissionResponse {
        reference: generate_reference(&mut rand::thread_rng()),
        received_at: received_now(),
        receipt_id: Uuid::new_v4().to_string(),
    };
    response.check_shape()?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistrationError;
    use coverreg_shared::{is_valid_receipt_id, PayloadViolation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn form() -> RegistrationForm {
        RegistrationForm {
            contact_name: "Test User".into(),
            contact_email: "test@example.com".into(),
            recording_id: "USRC17607839".into(),
            artist_name: "Demo Artist".into(),
            original_link: String::new(),
        }
    }

    #[test]
    fn test_reference_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let reference = generate_reference(&mut rng);
            let digits = reference.strip_prefix(REFERENCE_PREFIX).unwrap();
            assert_eq!(digits.len(), 6);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
            assert!(!digits.starts_with('0'));
        }
    }

    #[test]
    fn test_register_issues_identifiers() {
        let response = register(&form()).unwrap();
        assert!(response.reference.starts_with(REFERENCE_PREFIX));
        assert!(is_valid_receipt_id(&response.receipt_id));
        assert!(chrono::DateTime::parse_from_rfc3339(&response.received_at).is_ok());
        assert!(response.received_at.ends_with('Z'));
    }

    #[test]
    fn test_register_rejects_first_violation() {
        let mut bad = form();
        bad.recording_id = "123".into();
        let err = register(&bad).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::Payload(PayloadViolation::InvalidRecordingId)
        ));
    }

    #[test]
    fn test_receipt_ids_are_unique() {
        let a = register(&form()).unwrap();
        let b = register(&form()).unwrap();
        assert_ne!(a.receipt_id, b.receipt_id);
    }
}
