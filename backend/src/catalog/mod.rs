//! Original-work catalog.
//!
//! Resolves a recording id (ISRC) to the metadata of the composition it is
//! a cover of. Two sources are available:
//!
//! - [`FixtureCatalog`] - answers every well-formed ISRC with a sample work
//! - [`RemoteCatalog`] - asks an upstream metadata service over HTTP
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coverreg::catalog::WorkCatalog;
//!
//! let catalog = WorkCatalog::fixture();
//! let work = catalog.lookup("USRC17607839").await?;
//! assert_eq!(work.title, "Yesterday");
//! ```

use coverreg_shared::{is_valid_recording_id, OriginalWork};
use std::time::Duration;

use crate::api::logs::{log_info, log_warning};
use crate::error::{CatalogError, CatalogResult};

/// Timeout for requests to the upstream metadata service
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of original-work metadata.
#[derive(Clone)]
pub enum WorkCatalog {
    Fixture(FixtureCatalog),
    Remote(RemoteCatalog),
}

impl WorkCatalog {
    /// Catalog backed by the sample work.
    pub fn fixture() -> Self {
        WorkCatalog::Fixture(FixtureCatalog::default())
    }

    /// Remote catalog when a base URL is configured, fixture otherwise.
    pub fn from_url(metadata_url: Option<&str>) -> Self {
        match metadata_url {
            Some(url) => WorkCatalog::Remote(RemoteCatalog::new(url)),
            None => Self::fixture(),
        }
    }

    /// Short description for startup logs.
    pub fn describe(&self) -> String {
        match self {
            WorkCatalog::Fixture(_) => "fixture".to_string(),
            WorkCatalog::Remote(remote) => format!("remote ({})", remote.base_url),
        }
    }

    /// Look up the original work behind a recording id.
    ///
    /// The id is checked before any source is consulted.
    pub async fn lookup(&self, recording_id: &str) -> CatalogResult<OriginalWork> {
        if !is_valid_recording_id(recording_id) {
            return Err(CatalogError::InvalidRecordingId(recording_id.to_string()));
        }

        match self {
            WorkCatalog::Fixture(fixture) => Ok(fixture.work.clone()),
            WorkCatalog::Remote(remote) => remote.fetch(recording_id).await,
        }
    }
}

// =============================================================================
// Fixture
// =============================================================================

/// Catalog answering every ISRC with the same work.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    work: OriginalWork,
}

impl FixtureCatalog {
    pub fn new(work: OriginalWork) -> Self {
        Self { work }
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new(sample_work())
    }
}

/// The sample work served by the fixture catalog.
pub fn sample_work() -> OriginalWork {
    OriginalWork {
        title: "Yesterday".to_string(),
        work_number: "12341234".to_string(),
        composers: vec![
            "Irene Hygum Pedersen".to_string(),
            "Søren Stensby".to_string(),
            "Israa Azzam".to_string(),
        ],
        arranger: "Irene Hygum Pedersen".to_string(),
        lyricist: "Søren Stensby".to_string(),
    }
}

// =============================================================================
// Remote
// =============================================================================

/// Client for an upstream metadata service exposing `GET {base}/works/{isrc}`.
#[derive(Clone)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCatalog {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch(&self, recording_id: &str) -> CatalogResult<OriginalWork> {
        let url = format!("{}/works/{}", self.base_url, recording_id);
        log_info(format!("Fetching original work from {}", url));

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log_warning(format!("Metadata service answered {} for {}", status, recording_id));
            return Err(CatalogError::Upstream(format!("status {}", status)));
        }

        response
            .json::<OriginalWork>()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};

    async fn spawn_upstream() -> String {
        let app = Router::new().route(
            "/works/{isrc}",
            get(|Path(isrc): Path<String>| async move {
                if isrc == "GBAYE9601030" {
                    return Err(StatusCode::NOT_FOUND);
                }
                Ok(Json(OriginalWork {
                    title: format!("Work for {}", isrc),
                    ..sample_work()
                }))
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fixture_returns_sample_work() {
        let work = WorkCatalog::fixture().lookup("USRC17607839").await.unwrap();
        assert_eq!(work.title, "Yesterday");
        assert_eq!(work.composers.len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_id_never_reaches_source() {
        let catalog = WorkCatalog::from_url(Some("http://127.0.0.1:9"));
        let err = catalog.lookup("not-an-isrc").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecordingId(_)));
    }

    #[tokio::test]
    async fn test_remote_catalog_fetches_work() {
        let base = spawn_upstream().await;
        let catalog = WorkCatalog::from_url(Some(&format!("{}/", base)));

        let work = catalog.lookup("USRC17607839").await.unwrap();
        assert_eq!(work.title, "Work for USRC17607839");
        assert_eq!(work.work_number, "12341234");
    }

    #[tokio::test]
    async fn test_remote_catalog_maps_non_success_to_upstream() {
        let base = spawn_upstream().await;
        let catalog = WorkCatalog::from_url(Some(&base));

        let err = catalog.lookup("GBAYE9601030").await.unwrap_err();
        assert!(matches!(err, CatalogError::Upstream(_)));
    }

    #[test]
    fn test_describe() {
        assert_eq!(WorkCatalog::fixture().describe(), "fixture");
        assert_eq!(
            WorkCatalog::from_url(Some("http://meta.local")).describe(),
            "remote (http://meta.local)"
        );
    }
}
