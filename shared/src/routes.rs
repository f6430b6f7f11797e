//! Paths of the service endpoints and frontend pages.
//!
//! Identifiers are percent-encoded as single path segments, so an id can
//! never escape its segment.

use url::Url;

/// Submission endpoint.
pub const REGISTER_PATH: &str = "/register";

/// Original-work lookup endpoint for a recording id.
pub fn lookup_path(recording_id: &str) -> String {
    segment_path("lookup", recording_id)
}

/// Receipt endpoint (backend) and receipt page (frontend) for a receipt id.
pub fn receipt_path(receipt_id: &str) -> String {
    segment_path("receipt", receipt_id)
}

fn segment_path(prefix: &str, id: &str) -> String {
    let mut url = match Url::parse("http://localhost/") {
        Ok(url) => url,
        Err(_) => return format!("/{}/{}", prefix, id),
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(prefix).push(id);
    }
    url.path().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ids_are_untouched() {
        assert_eq!(lookup_path("USRC17607839"), "/lookup/USRC17607839");
        assert_eq!(receipt_path("receipt-789"), "/receipt/receipt-789");
        assert_eq!(
            receipt_path("00000000-0000-4000-8000-000000000000"),
            "/receipt/00000000-0000-4000-8000-000000000000"
        );
    }

    #[test]
    fn test_ids_cannot_escape_their_segment() {
        assert_eq!(receipt_path("a/b"), "/receipt/a%2Fb");
        assert_eq!(lookup_path("a b?c#d"), "/lookup/a%20b%3Fc%23d");
    }
}
