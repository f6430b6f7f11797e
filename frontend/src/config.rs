//! Application configuration.
//!
//! Centralized configuration for the cover registration frontend.
//! In development, these are hardcoded.

/// Backend API base URL.
///
/// The coverreg backend serving lookup, registration and receipts.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Application name, used as the document title.
pub const APP_NAME: &str = "Registrér dit covernummer";

/// Number of wizard steps.
pub const STEP_COUNT: usize = 3;
