//! Syntax checks for the values a registration carries.
//!
//! Every predicate here is total: empty or malformed input yields `false`,
//! never a panic. The same functions run in the browser (step validation)
//! and in the backend (payload validation), so both sides agree on what a
//! well-formed ISRC, e-mail address, link or receipt id looks like.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Two letters, three alphanumerics, two digits, five digits, each group
/// optionally separated by a single hyphen. ASCII only: case folding would
/// also admit letters such as U+017F and U+212A.
static RECORDING_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2}-?[A-Za-z0-9]{3}-?[0-9]{2}-?[0-9]{5}$").expect("valid ISRC regex")
});

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid e-mail regex"));

static RECEIPT_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("valid UUID regex")
});

/// Check an ISRC (International Standard Recording Code).
///
/// Case-insensitive; the value is not trimmed.
///
/// # Example
/// ```
/// use coverreg_shared::validators::is_valid_recording_id;
///
/// assert!(is_valid_recording_id("USRC17607839"));
/// assert!(is_valid_recording_id("us-rc1-76-07839"));
/// assert!(!is_valid_recording_id("USRC1760783"));
/// ```
pub fn is_valid_recording_id(value: &str) -> bool {
    !value.is_empty() && RECORDING_ID_REGEX.is_match(value)
}

/// Check an e-mail address after trimming surrounding whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

/// Check that the value parses as an absolute `http` or `https` URL.
pub fn is_valid_url(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    match Url::parse(trimmed) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Check a receipt id in canonical UUID form (8-4-4-4-12 hex digits).
pub fn is_valid_receipt_id(value: &str) -> bool {
    RECEIPT_ID_REGEX.is_match(value)
}
