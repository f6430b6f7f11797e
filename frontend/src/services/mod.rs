//! Backend services.
//!
//! This module provides the clients the wizard and the receipt page talk to:
//!
//! # Services
//!
//! - [`client`] - Shared HTTP plumbing ([`BackendClient`])
//! - [`lookup`] - Original-work lookup by ISRC
//! - [`registration`] - Registration submission
//! - [`receipt`] - Receipt fetch by id
//!
//! Each concern is a trait so the wizard can run against substitutes.

use std::future::Future;

use coverreg_shared::{OriginalWork, Receipt, RegistrationForm, SubmissionResponse};

use crate::types::AppResult;

pub mod client;
pub mod lookup;
pub mod receipt;
pub mod registration;

pub use client::BackendClient;

/// Fetches original-work metadata for a recording id.
pub trait LookupService: Clone + 'static {
    fn lookup(&self, recording_id: &str) -> impl Future<Output = AppResult<OriginalWork>>;
}

/// Sends a completed registration.
pub trait SubmissionService: Clone + 'static {
    fn submit(&self, form: &RegistrationForm) -> impl Future<Output = AppResult<SubmissionResponse>>;
}

/// Fetches a stored receipt.
pub trait ReceiptService: Clone + 'static {
    fn receipt(&self, receipt_id: &str) -> impl Future<Output = AppResult<Receipt>>;
}
