//! UI Components for the cover registration application.
//!
//! # Layout Components
//! - [`Header`] - Top bar with the application name
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Wizard Components
//! - [`RegistrationPage`] - The three-step registration wizard
//! - [`Stepper`] - Step progress indicator
//! - [`InputField`] - Labelled input with inline error
//! - [`OriginalWorkPanel`] - Looked-up original work on the last step
//!
//! # Receipt
//! - [`ReceiptPage`] - Confirmation fetched by receipt id

mod footer;
mod header;
mod hero;
mod input_field;
mod original_work;
mod receipt;
mod registration;
mod stepper;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use input_field::*;
pub use original_work::*;
pub use receipt::*;
pub use registration::*;
pub use stepper::*;
