//! Registration submission client.

use coverreg_shared::{RegistrationForm, SubmissionResponse, REGISTER_PATH};
use gloo_net::http::Request;

use super::client::{network_error, read_json, BackendClient};
use super::SubmissionService;
use crate::types::{AppError, AppResult};

impl SubmissionService for BackendClient {
    async fn submit(&self, form: &RegistrationForm) -> AppResult<SubmissionResponse> {
        let url = self.url(REGISTER_PATH);
        let request = Request::post(&url)
            .json(form)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;
        let response = request.send().await.map_err(network_error)?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_serializes_camel_case() {
        let form = RegistrationForm {
            contact_name: "Test User".into(),
            contact_email: "test@example.com".into(),
            recording_id: "USRC17607839".into(),
            artist_name: "Demo Artist".into(),
            original_link: String::new(),
        };

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["contactName"], "Test User");
        assert_eq!(value["recordingId"], "USRC17607839");
        assert_eq!(value["originalLink"], "");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"reference":"NMP-123456","receivedAt":"2024-01-01T00:00:00.000Z","receiptId":"receipt-789"}"#;
        let response: SubmissionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.receipt_id, "receipt-789");
        assert_eq!(response.reference, "NMP-123456");
    }
}
