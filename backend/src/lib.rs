//! # Coverreg - cover-song registration service
//!
//! Backend of the cover registration wizard. It resolves a recording's ISRC
//! to the original work it covers, accepts registrations and serves receipts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  GET /lookup/{isrc}    ┌─────────────┐
//! │             │───────────────────────▶│   Catalog   │ (fixture or upstream)
//! │   Wizard    │  POST /register        ├─────────────┤
//! │  (browser)  │───────────────────────▶│ Registration│ (reference, receipt id)
//! │             │  GET /receipt/{id}     ├─────────────┤
//! │             │───────────────────────▶│  Receipts   │ (fixture store)
//! └─────────────┘                        └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coverreg::{config::ServerConfig, server::start_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env().unwrap();
//!     start_server(config).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Environment and CLI configuration
//! - [`catalog`] - Original-work lookup by ISRC
//! - [`registration`] - Submission intake and identifier generation
//! - [`receipts`] - Receipt retrieval
//! - [`api`] - HTTP API server and log stream

// Core modules
pub mod error;
pub mod config;

// Services
pub mod catalog;
pub mod registration;
pub mod receipts;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CatalogError, ConfigError, ReceiptError, RegistrationError, ServerError};

// =============================================================================
// Re-exports - Services
// =============================================================================

pub use catalog::{sample_work, FixtureCatalog, RemoteCatalog, WorkCatalog};
pub use config::ServerConfig;
pub use receipts::{fetch_receipt, sample_receipt, EmptyReceipts, FixtureReceipts, ReceiptStore};
pub use registration::{generate_reference, register, REFERENCE_PREFIX};

// =============================================================================
// Re-exports - Shared models
// =============================================================================

pub use coverreg_shared::{
    ErrorBody, Field, OriginalWork, PayloadViolation, Receipt, RegistrationForm, SubmissionResponse,
};

// Server
pub mod server {
    pub use crate::api::server::{build_router, start_server, AppState};
}
