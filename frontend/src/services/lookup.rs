//! Original-work lookup client.

use coverreg_shared::{lookup_path, OriginalWork};
use gloo_net::http::Request;

use super::client::{network_error, read_json, BackendClient};
use super::LookupService;
use crate::types::AppResult;

impl LookupService for BackendClient {
    async fn lookup(&self, recording_id: &str) -> AppResult<OriginalWork> {
        let url = self.url(&lookup_path(recording_id));
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_work_deserialization() {
        let json = r#"{
            "title": "Yesterday",
            "workNumber": "12341234",
            "composers": ["Irene Hygum Pedersen", "Søren Stensby"],
            "arranger": "Irene Hygum Pedersen",
            "lyricist": "Søren Stensby"
        }"#;

        let work: OriginalWork = serde_json::from_str(json).unwrap();
        assert_eq!(work.work_number, "12341234");
        assert_eq!(work.composers_line(), "Irene Hygum Pedersen, Søren Stensby");
    }
}
