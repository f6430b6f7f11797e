//! Receipt retrieval.
//!
//! Registrations are not persisted; the default [`FixtureReceipts`] store
//! answers every well-formed receipt id with a sample record stamped with
//! that id. Other stores can be plugged in through [`ReceiptStore`].

use coverreg_shared::{is_valid_receipt_id, Receipt};

use crate::error::{ReceiptError, ReceiptResult};
use crate::registration::received_now;

/// A source of receipts keyed by receipt id.
pub trait ReceiptStore: Send + Sync {
    /// The receipt with this id, if any.
    fn find(&self, receipt_id: &str) -> Option<Receipt>;
}

/// Store that knows every receipt id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReceipts;

impl ReceiptStore for FixtureReceipts {
    fn find(&self, receipt_id: &str) -> Option<Receipt> {
        Some(sample_receipt(receipt_id))
    }
}

/// Store that knows no receipt.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyReceipts;

impl ReceiptStore for EmptyReceipts {
    fn find(&self, _receipt_id: &str) -> Option<Receipt> {
        None
    }
}

/// The sample receipt served by [`FixtureReceipts`].
pub fn sample_receipt(receipt_id: &str) -> Receipt {
    Receipt {
        receipt_id: receipt_id.to_string(),
        contact_name: "Irene Hygum Pedersen".to_string(),
        contact_email: "irene@koda.dk".to_string(),
        recording_id: "GBAYE9601030".to_string(),
        artist_name: "The Beatles".to_string(),
        original_link: "https://example.com/original-work/123456".to_string(),
        reference: "NMP-123456".to_string(),
        received_at: received_now(),
    }
}

/// Fetch a receipt: validate the id, look it up, check the record's shape.
pub fn fetch_receipt(store: &dyn ReceiptStore, receipt_id: &str) -> ReceiptResult<Receipt> {
    if !is_valid_receipt_id(receipt_id) {
        return Err(ReceiptError::InvalidId(receipt_id.to_string()));
    }

    let receipt = store
        .find(receipt_id)
        .ok_or_else(|| ReceiptError::NotFound(receipt_id.to_string()))?;
    receipt.check_shape()?;

    Ok(receipt)
}
