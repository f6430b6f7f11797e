//! Registration flow orchestrator.
//!
//! Drives the [`WizardState`] from user actions and async results. Methods that
//! need async work return a [`FlowCommand`]; the caller runs it and feeds the
//! outcome back through [`RegistrationFlow::on_lookup_status`] or
//! [`RegistrationFlow::on_submission_result`].

use coverreg_shared::{receipt_path, Field, OriginalWork, SubmissionResponse};
use futures::future::LocalBoxFuture;
use futures::FutureExt;

use super::lookup::{start_lookup, LookupFailure, LookupHandle, LookupStatus, LookupSubscription, LookupTask};
use super::state::{Advance, WizardState};
use super::steps::Step;
use crate::services::{LookupService, SubmissionService};
use crate::types::AppResult;

/// Future resolving to the submission outcome.
pub type SubmissionTask = LocalBoxFuture<'static, AppResult<SubmissionResponse>>;

/// Async work requested by the flow.
pub enum FlowCommand {
    None,
    RunLookup {
        subscription: LookupSubscription,
        task: LookupTask,
    },
    RunSubmission(SubmissionTask),
}

impl FlowCommand {
    pub fn is_none(&self) -> bool {
        matches!(self, FlowCommand::None)
    }
}

/// What the original-work panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupPhase {
    Idle,
    Loading,
    Ready(OriginalWork),
    Failed(LookupFailure),
}

/// Where to go after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub receipt_id: String,
}

impl Navigation {
    pub fn path(&self) -> String {
        receipt_path(&self.receipt_id)
    }
}

pub struct RegistrationFlow<L, S> {
    state: WizardState,
    lookup_service: L,
    submission_service: S,
    lookup: LookupPhase,
    active_lookup: Option<LookupHandle>,
    next_generation: u64,
    torn_down: bool,
}

impl<L: LookupService, S: SubmissionService> RegistrationFlow<L, S> {
    pub fn new(lookup_service: L, submission_service: S) -> Self {
        Self {
            state: WizardState::new(),
            lookup_service,
            submission_service,
            lookup: LookupPhase::Idle,
            active_lookup: None,
            next_generation: 0,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn lookup_phase(&self) -> &LookupPhase {
        &self.lookup
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Fields rendered for the current step. The link field is hidden while
    /// the last step is busy.
    pub fn visible_fields(&self) -> &'static [Field] {
        let step = self.state.step();
        if step.is_last() && self.state.is_loading() {
            &[]
        } else {
            step.fields()
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if self.torn_down {
            return;
        }
        self.state.update_field(field, value);
    }

    pub fn can_go_back(&self) -> bool {
        !self.torn_down && self.state.can_go_back()
    }

    /// Whether "Næste"/"Send" is enabled. On the last step the original work
    /// must have been found.
    pub fn can_advance(&self) -> bool {
        if self.torn_down || !self.state.can_advance() {
            return false;
        }
        !self.state.step().is_last() || matches!(self.lookup, LookupPhase::Ready(_))
    }

    /// Handle "Næste"/"Send".
    pub fn next(&mut self) -> FlowCommand {
        if !self.can_advance() {
            return FlowCommand::None;
        }

        match self.state.advance() {
            Advance::Blocked => FlowCommand::None,
            Advance::Moved(step) if step.is_last() => self.enter_lookup(),
            Advance::Moved(_) => FlowCommand::None,
            Advance::Submit => self.submit(),
        }
    }

    /// Handle "Tilbage" and "Søg igen". Returns false when going back is not allowed.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        if self.state.step().is_last() {
            self.cancel_lookup();
            self.lookup = LookupPhase::Idle;
        }
        self.state.retreat();
        true
    }

    /// Feed one lookup event. Events from cancelled or superseded lookups are
    /// dropped; returns whether the event was applied.
    pub fn on_lookup_status(&mut self, generation: u64, status: LookupStatus) -> bool {
        if self.torn_down {
            return false;
        }
        let current = self.active_lookup.as_ref().map(LookupHandle::generation);
        if current != Some(generation) {
            log::debug!("Dropping lookup event from #{}", generation);
            return false;
        }

        self.state.apply_lookup_status(&status);
        if status.is_terminal() {
            self.active_lookup = None;
        }
        self.lookup = match status {
            LookupStatus::Loading => LookupPhase::Loading,
            LookupStatus::Ready(work) => LookupPhase::Ready(work),
            LookupStatus::Error(failure) => LookupPhase::Failed(failure),
        };
        true
    }

    /// Feed the submission outcome. Success yields the receipt to navigate to;
    /// the loading flag stays set while the page changes.
    pub fn on_submission_result(
        &mut self,
        result: AppResult<SubmissionResponse>,
    ) -> Option<Navigation> {
        if self.torn_down {
            return None;
        }

        match result {
            Ok(response) => {
                log::info!("✅ Registration {} received", response.reference);
                Some(Navigation {
                    receipt_id: response.receipt_id,
                })
            }
            Err(e) => {
                log::error!("❌ Failed to send registration: {}", e);
                self.state.fail_submission();
                None
            }
        }
    }

    /// The view is going away: abort the lookup and ignore anything that arrives later.
    pub fn teardown(&mut self) {
        self.cancel_lookup();
        self.torn_down = true;
    }

    fn enter_lookup(&mut self) -> FlowCommand {
        self.cancel_lookup();

        let generation = self.next_generation;
        self.next_generation += 1;

        let recording_id = self.state.form().recording_id.clone();
        let (subscription, task) = start_lookup(&self.lookup_service, &recording_id, generation);
        self.active_lookup = Some(subscription.handle());
        self.lookup = LookupPhase::Loading;

        // The request is outstanding from here on, before the queued Loading
        // event is consumed. Applying that event again is a no-op.
        if !recording_id.is_empty() {
            self.state.apply_lookup_status(&LookupStatus::Loading);
        }

        FlowCommand::RunLookup { subscription, task }
    }

    fn submit(&mut self) -> FlowCommand {
        self.state.begin_submission();

        let service = self.submission_service.clone();
        let form = self.state.form().clone();
        log::info!("📤 Sending registration for {}", form.recording_id);

        FlowCommand::RunSubmission(async move { service.submit(&form).await }.boxed_local())
    }

    fn cancel_lookup(&mut self) {
        if let Some(handle) = self.active_lookup.take() {
            handle.cancel();
        }
    }
}
