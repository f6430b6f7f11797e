//! Receipt page, reached after a successful registration.

use chrono::{DateTime, Local};
use coverreg_shared::Receipt;
use futures::future::{AbortHandle, Abortable};
use futures::FutureExt;
use leptos::*;
use leptos_router::use_params_map;

use super::DescriptionItem;
use crate::services::{BackendClient, ReceiptService};
use crate::types::AppResult;

pub const MSG_RECEIPT_FAILED: &str = "Kunne ikke hente kvitteringen for din registrering.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptState {
    Loading,
    Error(String),
    Success(Receipt),
}

impl ReceiptState {
    pub fn from_result(result: AppResult<Receipt>) -> Self {
        match result {
            Ok(receipt) => ReceiptState::Success(receipt),
            Err(_) => ReceiptState::Error(MSG_RECEIPT_FAILED.to_string()),
        }
    }
}

/// Render an RFC 3339 timestamp in local time. Unparsable input is shown as is.
pub fn format_received_at(received_at: &str) -> String {
    match DateTime::parse_from_rfc3339(received_at) {
        Ok(time) => time.with_timezone(&Local).format("%d.%m.%Y %H.%M.%S").to_string(),
        Err(_) => received_at.to_string(),
    }
}

pub fn original_link_label(receipt: &Receipt) -> String {
    if receipt.original_link.is_empty() {
        "Ikke angivet".to_string()
    } else {
        receipt.original_link.clone()
    }
}

#[component]
pub fn ReceiptPage() -> impl IntoView {
    let params = use_params_map();
    let receipt_id = move || params.with(|p| p.get("receipt_id").cloned().unwrap_or_default());
    let (state, set_state) = create_signal(ReceiptState::Loading);
    let client = BackendClient::default();

    create_effect(move |_| {
        let id = receipt_id();
        let client = client.clone();
        set_state.set(ReceiptState::Loading);

        let (abort, registration) = AbortHandle::new_pair();
        let fetch = async move {
            let result = client.receipt(&id).await;
            if let Err(e) = &result {
                log::error!("❌ Failed to load receipt {}: {}", id, e);
            }
            set_state.set(ReceiptState::from_result(result));
        };
        spawn_local(Abortable::new(fetch, registration).map(|_| ()));

        on_cleanup(move || abort.abort());
    });

    view! {
        <div class="container">
            <div class="receipt-card">
                {move || match state.get() {
                    ReceiptState::Loading => view! {
                        <p class="receipt-loading">"Henter kvittering..."</p>
                    }
                    .into_view(),
                    ReceiptState::Error(message) => view! {
                        <div class="receipt-error">
                            <p class="receipt-error-title">"Vi kunne ikke hente en kvittering."</p>
                            <p>{message}</p>
                        </div>
                    }
                    .into_view(),
                    ReceiptState::Success(receipt) => view! { <ReceiptDetails receipt=receipt/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ReceiptDetails(receipt: Receipt) -> impl IntoView {
    view! {
        <div class="receipt-details">
            <p class="receipt-badge">"Registrering sendt"</p>
            <h1>"Tak! Vi har modtaget din registrering"</h1>
            <p class="receipt-reference">
                {format!(
                    "Referencenummer {} ({}).",
                    receipt.reference,
                    format_received_at(&receipt.received_at)
                )}
            </p>
            <div class="receipt-summary">
                <h2>"Uddrag af indsendte data"</h2>
                <DescriptionItem
                    label="Kontakt"
                    value=format!("{}, {}", receipt.contact_name, receipt.contact_email)
                />
                <DescriptionItem label="ISRC" value=receipt.recording_id.clone()/>
                <DescriptionItem label="Artist" value=receipt.artist_name.clone()/>
                <DescriptionItem label="Link til original" value=original_link_label(&receipt)/>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    fn receipt(original_link: &str) -> Receipt {
        Receipt {
            receipt_id: "00000000-0000-4000-8000-000000000000".into(),
            contact_name: "Test User".into(),
            contact_email: "test@example.com".into(),
            recording_id: "USRC17607839".into(),
            artist_name: "Demo Artist".into(),
            original_link: original_link.into(),
            reference: "NMP-123456".into(),
            received_at: "2024-05-01T12:30:00.000Z".into(),
        }
    }

    #[test]
    fn test_state_from_result() {
        assert_eq!(
            ReceiptState::from_result(Ok(receipt(""))),
            ReceiptState::Success(receipt(""))
        );
        assert_eq!(
            ReceiptState::from_result(Err(AppError::Status {
                status: 404,
                message: "Ingen registrering fundet for det angivne Receipt ID.".into(),
            })),
            ReceiptState::Error(MSG_RECEIPT_FAILED.to_string())
        );
    }

    #[test]
    fn test_format_received_at() {
        let formatted = format_received_at("2024-05-01T12:30:00.000Z");
        assert!(formatted.contains("2024"));
        assert_ne!(formatted, "2024-05-01T12:30:00.000Z");
        assert_eq!(format_received_at("yesterday"), "yesterday");
    }

    #[test]
    fn test_original_link_label() {
        assert_eq!(original_link_label(&receipt("")), "Ikke angivet");
        assert_eq!(
            original_link_label(&receipt("https://example.com")),
            "https://example.com"
        );
    }
}
