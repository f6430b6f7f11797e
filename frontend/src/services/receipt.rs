//! Receipt client.

use coverreg_shared::{is_valid_receipt_id, receipt_path, Receipt};
use gloo_net::http::Request;

use super::client::{network_error, read_json, BackendClient};
use super::ReceiptService;
use crate::types::{AppError, AppResult};

impl ReceiptService for BackendClient {
    async fn receipt(&self, receipt_id: &str) -> AppResult<Receipt> {
        if !is_valid_receipt_id(receipt_id) {
            return Err(AppError::Validation(format!("Invalid receipt id: {}", receipt_id)));
        }

        let url = self.url(&receipt_path(receipt_id));
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let receipt: Receipt = read_json(response).await?;
        receipt
            .check_shape()
            .map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(receipt)
    }
}
