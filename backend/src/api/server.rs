//! HTTP Server for the registration API.
//!
//! # API Endpoints
//!
//! | Method | Path                     | Description                        |
//! |--------|--------------------------|------------------------------------|
//! | GET    | `/health`                | Health check                       |
//! | GET    | `/lookup/{recordingId}`  | Original work behind an ISRC       |
//! | POST   | `/register`              | Submit a cover registration        |
//! | GET    | `/receipt/{receiptId}`   | Receipt of a registration          |
//! | GET    | `/logs`                  | SSE stream of service logs         |

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, Method},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use coverreg_shared::{OriginalWork, PayloadViolation, Receipt, RegistrationForm, SubmissionResponse, REGISTER_PATH};
use futures::stream::Stream;
use std::{convert::Infallible, net::SocketAddr, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::{log_error, log_info, log_info_indent, log_success, log_warning, LOG_BROADCASTER};
use super::types::{ApiResult, HealthResponse};
use crate::catalog::WorkCatalog;
use crate::config::ServerConfig;
use crate::error::{CatalogError, RegistrationError, ServerError, ServerResult};
use crate::receipts::{fetch_receipt, FixtureReceipts, ReceiptStore};
use crate::registration::register;

/// Shared, read-only state of the service.
pub struct AppState {
    pub catalog: WorkCatalog,
    pub receipts: Arc<dyn ReceiptStore>,
    /// Artificial delay of the stub endpoints
    pub latency: Duration,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            catalog: WorkCatalog::from_url(config.metadata_url.as_deref()),
            receipts: Arc::new(FixtureReceipts),
            latency: config.latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// Build the router with all endpoints and a permissive CORS layer.
pub fn build_router(state: Arc<AppState>) -> Router {
    // The wasm frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/lookup/{recording_id}", get(lookup_work))
        .route(REGISTER_PATH, post(register_song))
        .route("/receipt/{receipt_id}", get(get_receipt))
        .route("/logs", get(sse_logs))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let state = Arc::new(AppState::from_config(&config));
    let catalog = state.catalog.describe();
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log_info(format!("🚀 Cover registration server running on http://localhost:{}", config.port));
    log_info_indent(format!("Catalog: {}", catalog), 1);
    log_info_indent(format!("Simulated latency: {} ms", config.latency.as_millis()), 1);
    log_info_indent("GET  /lookup/{recordingId}", 1);
    log_info_indent("POST /register", 1);
    log_info_indent("GET  /receipt/{receiptId}", 1);
    log_info_indent("GET  /logs (SSE)", 1);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "coverreg",
        version: env!("CARGO_PKG_VERSION"),
        catalog: state.catalog.describe(),
        endpoints: [
            "GET /lookup/{recordingId}",
            "POST /register",
            "GET /receipt/{receiptId}",
            "GET /logs (SSE)",
        ],
    })
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    // Lagged receivers skip the entries they missed
    let stream = BroadcastStream::new(rx).filter_map(|result| {
        let entry = result.ok()?;
        let json = serde_json::to_string(&entry).ok()?;
        Some(Ok(Event::default().data(json)))
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Original work lookup endpoint
async fn lookup_work(
    State(state): State<Arc<AppState>>,
    Path(recording_id): Path<String>,
) -> ApiResult<OriginalWork> {
    let result = state.catalog.lookup(&recording_id).await;

    // Every well-formed id waits, whatever the catalog answered
    if !matches!(result, Err(CatalogError::InvalidRecordingId(_))) {
        state.simulate_latency().await;
    }

    let work = match result {
        Ok(work) => work,
        Err(e) => {
            log_warning(format!("Lookup {} rejected: {}", recording_id, e));
            return Err(ServerError::from(e).into());
        }
    };

    log_success(format!("Lookup {} → \"{}\"", recording_id, work.title));

    Ok(Json(work))
}

/// Registration submission endpoint
async fn register_song(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegistrationForm>, JsonRejection>,
) -> ApiResult<SubmissionResponse> {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            log_warning(format!("Registration payload rejected: {}", rejection.body_text()));
            let err = RegistrationError::from(PayloadViolation::Malformed);
            return Err(ServerError::from(err).into());
        }
    };

    let response = match register(&form) {
        Ok(response) => response,
        Err(e) => {
            match &e {
                RegistrationError::Payload(v) => log_warning(format!("Registration rejected: {}", v)),
                RegistrationError::Shape(s) => log_error(format!("Registration response invalid: {}", s)),
            }
            return Err(ServerError::from(e).into());
        }
    };

    state.simulate_latency().await;
    log_success(format!(
        "Registered {} by {} as {} (receipt {})",
        form.recording_id, form.artist_name, response.reference, response.receipt_id
    ));

    Ok(Json(response))
}

/// Receipt retrieval endpoint
async fn get_receipt(
    State(state): State<Arc<AppState>>,
    Path(receipt_id): Path<String>,
) -> ApiResult<Receipt> {
    state.simulate_latency().await;

    match fetch_receipt(state.receipts.as_ref(), &receipt_id) {
        Ok(receipt) => {
            log_info(format!("Receipt {} served", receipt_id));
            Ok(Json(receipt))
        }
        Err(e) => {
            log_warning(format!("Receipt {} not served: {}", receipt_id, e));
            Err(ServerError::from(e).into())
        }
    }
}
