//! Registration wizard core.
//!
//! Pure Rust, no browser dependency:
//!
//! - [`steps`] - Step enumeration and Danish copy
//! - [`state`] - Wizard state machine
//! - [`lookup`] - Original-work lookup coordination
//! - [`flow`] - Orchestrator tying state, lookup and submission together

pub mod flow;
pub mod lookup;
pub mod state;
pub mod steps;

pub use flow::{FlowCommand, LookupPhase, Navigation, RegistrationFlow, SubmissionTask};
pub use lookup::{start_lookup, LookupFailure, LookupHandle, LookupStatus, LookupSubscription, LookupTask};
pub use state::{step_errors, Action, Advance, FieldErrors, WizardState};
pub use steps::{field_copy, FieldCopy, Step};

/// Substitutable services for the wizard tests.
#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::rc::Rc;

    use coverreg_shared::{OriginalWork, RegistrationForm, SubmissionResponse};
    use futures::channel::oneshot;

    use crate::services::{LookupService, SubmissionService};
    use crate::types::{AppError, AppResult};

    pub fn sample_work() -> OriginalWork {
        OriginalWork {
            title: "Yesterday".into(),
            work_number: "T-010.123.456-7".into(),
            composers: vec!["John Lennon".into(), "Paul McCartney".into()],
            arranger: "George Martin".into(),
            lyricist: "Paul McCartney".into(),
        }
    }

    /// Queue of replies, each handed out to one call.
    struct Replies<T, C> {
        queue: RefCell<VecDeque<oneshot::Receiver<AppResult<T>>>>,
        calls: RefCell<Vec<C>>,
    }

    impl<T, C: Clone> Replies<T, C> {
        fn new() -> Self {
            Self {
                queue: RefCell::new(VecDeque::new()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn push(&self, result: AppResult<T>) {
            let sender = self.defer();
            let _ = sender.send(result);
        }

        fn defer(&self) -> oneshot::Sender<AppResult<T>> {
            let (sender, receiver) = oneshot::channel();
            self.queue.borrow_mut().push_back(receiver);
            sender
        }

        fn take(&self, call: C) -> impl Future<Output = AppResult<T>> {
            self.calls.borrow_mut().push(call);
            let reply = self.queue.borrow_mut().pop_front();
            async move {
                match reply {
                    Some(receiver) => receiver
                        .await
                        .unwrap_or_else(|_| Err(AppError::Network("reply dropped".into()))),
                    None => Err(AppError::Network("no reply queued".into())),
                }
            }
        }

        fn calls(&self) -> Vec<C> {
            self.calls.borrow().clone()
        }
    }

    #[derive(Clone)]
    pub struct StubLookup(Rc<Replies<OriginalWork, String>>);

    impl Default for StubLookup {
        fn default() -> Self {
            Self(Rc::new(Replies::new()))
        }
    }

    impl StubLookup {
        pub fn replying(result: AppResult<OriginalWork>) -> Self {
            let stub = Self::default();
            stub.push(result);
            stub
        }

        pub fn push(&self, result: AppResult<OriginalWork>) {
            self.0.push(result);
        }

        /// Queue a reply that is sent later through the returned sender.
        pub fn defer(&self) -> oneshot::Sender<AppResult<OriginalWork>> {
            self.0.defer()
        }

        pub fn calls(&self) -> Vec<String> {
            self.0.calls()
        }
    }

    impl LookupService for StubLookup {
        fn lookup(&self, recording_id: &str) -> impl Future<Output = AppResult<OriginalWork>> {
            self.0.take(recording_id.to_string())
        }
    }

    #[derive(Clone)]
    pub struct StubSubmission(Rc<Replies<SubmissionResponse, RegistrationForm>>);

    impl Default for StubSubmission {
        fn default() -> Self {
            Self(Rc::new(Replies::new()))
        }
    }

    impl StubSubmission {
        pub fn replying(result: AppResult<SubmissionResponse>) -> Self {
            let stub = Self::default();
            stub.push(result);
            stub
        }

        pub fn push(&self, result: AppResult<SubmissionResponse>) {
            self.0.push(result);
        }

        pub fn calls(&self) -> Vec<RegistrationForm> {
            self.0.calls()
        }
    }

    impl SubmissionService for StubSubmission {
        fn submit(
            &self,
            form: &RegistrationForm,
        ) -> impl Future<Output = AppResult<SubmissionResponse>> {
            self.0.take(form.clone())
        }
    }
}
