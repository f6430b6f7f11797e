//! Cover Registration - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for registering a cover song through a three-step
//! wizard and showing the resulting receipt.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /                     RegistrationPage                      │
//! │                        ├── Hero                              │
//! │                        ├── Stepper                           │
//! │                        ├── OriginalWorkPanel (step 3)        │
//! │                        └── InputField per visible field      │
//! │  /receipt/:receipt_id  ReceiptPage                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`wizard`] - Wizard state machine, lookup coordination and flow (no browser dependency)
//! - [`services`] - Backend communication (lookup, registration, receipt)
//! - [`components`] - UI components
//! - [`types`] - Common types (AppError)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;
pub mod wizard;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult};

// Components
pub use components::*;

// Services
pub use services::{BackendClient, LookupService, ReceiptService, SubmissionService};

// Wizard
pub use wizard::{RegistrationFlow, Step, WizardState};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Cover Registration - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=RegistrationPage/>
                    <Route path="/receipt/:receipt_id" view=ReceiptPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
