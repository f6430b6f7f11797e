//! HTTP client for the coverreg backend.

use coverreg_shared::ErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::config::BACKEND_URL;
use crate::types::{AppError, AppResult};

/// Handle on the backend. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendClient {
    base_url: String,
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an already-encoded path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Decode a backend response, mapping non-2xx answers to [`AppError::Status`].
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        return Err(AppError::Status { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

pub(crate) fn network_error(e: gloo_net::Error) -> AppError {
    AppError::Network(e.to_string())
}
