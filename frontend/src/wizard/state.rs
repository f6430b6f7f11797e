//! Wizard state machine.
//!
//! [`WizardState`] holds the step index, form values, field errors, the
//! step-level banner and the loading flag. Every mutation goes through
//! [`WizardState::dispatch`]; the higher-level operations are compositions
//! of [`Action`]s.

use std::collections::BTreeMap;

use coverreg_shared::{is_valid_email, is_valid_recording_id, is_valid_url, Field, RegistrationForm};

use super::lookup::LookupStatus;
use super::steps::{
    Step, MSG_ARTIST_NAME, MSG_CONTACT_EMAIL, MSG_CONTACT_NAME, MSG_LOOKUP_FAILED,
    MSG_ORIGINAL_LINK, MSG_RECORDING_ID, MSG_SUBMISSION_FAILED,
};

// =============================================================================
// Field Errors
// =============================================================================

/// Messages for the currently invalid fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Errors of `step` for the given form. Fields of other steps are never inspected.
pub fn step_errors(step: Step, form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        Step::Contact => {
            if form.contact_name.trim().is_empty() {
                errors.insert(Field::ContactName, MSG_CONTACT_NAME);
            }
            if !is_valid_email(&form.contact_email) {
                errors.insert(Field::ContactEmail, MSG_CONTACT_EMAIL);
            }
        }
        Step::Recording => {
            if !is_valid_recording_id(&form.recording_id) {
                errors.insert(Field::RecordingId, MSG_RECORDING_ID);
            }
            if form.artist_name.trim().is_empty() {
                errors.insert(Field::ArtistName, MSG_ARTIST_NAME);
            }
        }
        Step::OriginalWork => {
            let link = form.original_link.trim();
            if !link.is_empty() && !is_valid_url(link) {
                errors.insert(Field::OriginalLink, MSG_ORIGINAL_LINK);
            }
        }
    }

    errors
}

// =============================================================================
// Actions
// =============================================================================

/// A primitive state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace a field value and drop that field's error.
    UpdateField { field: Field, value: String },
    /// Replace the whole error set.
    SetFieldErrors(FieldErrors),
    ClearFieldErrors,
    SetStep(Step),
    SetLoading(bool),
    SetSubmissionError(Option<String>),
}

/// Outcome of [`WizardState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The active step has invalid fields.
    Blocked,
    /// Moved forward to the given step.
    Moved(Step),
    /// The last step is valid; the caller should submit.
    Submit,
}

// =============================================================================
// Wizard State
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    step: Step,
    form: RegistrationForm,
    field_errors: FieldErrors,
    submission_error: Option<String>,
    is_loading: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh session: first step, empty form.
    pub fn new() -> Self {
        Self {
            step: Step::FIRST,
            form: RegistrationForm::default(),
            field_errors: FieldErrors::new(),
            submission_error: None,
            is_loading: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(field)
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Apply a single transition.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::UpdateField { field, value } => {
                self.form.set(field, value);
                self.field_errors.remove(field);
            }
            Action::SetFieldErrors(errors) => self.field_errors = errors,
            Action::ClearFieldErrors => self.field_errors = FieldErrors::new(),
            Action::SetStep(step) => self.step = step,
            Action::SetLoading(loading) => self.is_loading = loading,
            Action::SetSubmissionError(message) => self.submission_error = message,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(Action::UpdateField {
            field,
            value: value.into(),
        });
    }

    /// Replace the field errors with those of `step` and report whether it is valid.
    pub fn validate_step(&mut self, step: Step) -> bool {
        let errors = step_errors(step, &self.form);
        let valid = errors.is_empty();
        self.dispatch(Action::SetFieldErrors(errors));
        valid
    }

    pub fn advance(&mut self) -> Advance {
        if !self.validate_step(self.step) {
            return Advance::Blocked;
        }

        match self.step.next() {
            Some(next) => {
                self.dispatch(Action::SetStep(next));
                Advance::Moved(next)
            }
            None => Advance::Submit,
        }
    }

    /// Go back one step, dropping every field error. Returns the new step.
    pub fn retreat(&mut self) -> Step {
        let previous = self.step.previous();
        self.dispatch(Action::ClearFieldErrors);
        self.dispatch(Action::SetStep(previous));
        previous
    }

    /// Fold a lookup status into the loading flag and banner.
    pub fn apply_lookup_status(&mut self, status: &LookupStatus) {
        match status {
            LookupStatus::Loading => self.dispatch(Action::SetLoading(true)),
            LookupStatus::Ready(_) => {
                self.dispatch(Action::SetLoading(false));
                self.dispatch(Action::SetSubmissionError(None));
            }
            LookupStatus::Error(_) => {
                self.dispatch(Action::SetLoading(false));
                self.dispatch(Action::SetSubmissionError(Some(MSG_LOOKUP_FAILED.to_string())));
            }
        }
    }

    pub fn begin_submission(&mut self) {
        self.dispatch(Action::SetSubmissionError(None));
        self.dispatch(Action::SetLoading(true));
    }

    /// Record a failed submission. The step and the form are kept for a retry.
    pub fn fail_submission(&mut self) {
        self.dispatch(Action::SetSubmissionError(Some(MSG_SUBMISSION_FAILED.to_string())));
        self.dispatch(Action::SetLoading(false));
    }

    pub fn can_go_back(&self) -> bool {
        self.step != Step::FIRST && !self.is_loading
    }

    pub fn can_advance(&self) -> bool {
        !self.is_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::lookup::LookupFailure;

    fn filled() -> WizardState {
        let mut state = WizardState::new();
        state.update_field(Field::ContactName, "Test User");
        state.update_field(Field::ContactEmail, "test@example.com");
        state.update_field(Field::RecordingId, "USRC17607839");
        state.update_field(Field::ArtistName, "Demo Artist");
        state
    }

    #[test]
    fn test_initial_state() {
        let state = WizardState::new();
        assert_eq!(state.step(), Step::Contact);
        assert_eq!(state.form(), &RegistrationForm::default());
        assert!(state.field_errors().is_empty());
        assert_eq!(state.submission_error(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_edit_clears_only_that_field_error() {
        let mut state = WizardState::new();
        assert!(!state.validate_step(Step::Contact));
        assert_eq!(state.field_errors().len(), 2);

        state.update_field(Field::ContactName, "A");
        assert_eq!(state.field_error(Field::ContactName), None);
        assert_eq!(state.field_error(Field::ContactEmail), Some(MSG_CONTACT_EMAIL));
    }

    #[test]
    fn test_edit_clears_error_even_when_still_invalid() {
        let mut state = WizardState::new();
        state.validate_step(Step::Contact);
        state.update_field(Field::ContactEmail, "still-bad");
        assert!(!state.field_errors().contains(Field::ContactEmail));
    }

    #[test]
    fn test_validate_step_only_touches_active_step() {
        let mut state = WizardState::new();
        assert!(!state.validate_step(Step::Recording));
        assert!(state.field_errors().contains(Field::RecordingId));
        assert!(state.field_errors().contains(Field::ArtistName));
        assert!(!state.field_errors().contains(Field::ContactName));
        assert!(!state.field_errors().contains(Field::ContactEmail));
    }

    #[test]
    fn test_validate_step_replaces_previous_errors() {
        let mut state = WizardState::new();
        state.validate_step(Step::Contact);
        assert!(state.validate_step(Step::OriginalWork));
        assert!(state.field_errors().is_empty());
    }

    #[test]
    fn test_step_messages() {
        let mut state = WizardState::new();
        state.update_field(Field::RecordingId, "123");
        state.validate_step(Step::Recording);
        assert_eq!(state.field_error(Field::RecordingId), Some(MSG_RECORDING_ID));
        assert_eq!(state.field_error(Field::ArtistName), Some(MSG_ARTIST_NAME));
    }

    #[test]
    fn test_whitespace_name_is_invalid() {
        let mut state = WizardState::new();
        state.update_field(Field::ContactName, "   ");
        state.update_field(Field::ContactEmail, "test@example.com");
        assert!(!state.validate_step(Step::Contact));
        assert_eq!(state.field_error(Field::ContactName), Some(MSG_CONTACT_NAME));
    }

    #[test]
    fn test_original_link_optional_but_checked_when_present() {
        let mut state = filled();
        assert!(state.validate_step(Step::OriginalWork));

        state.update_field(Field::OriginalLink, "   ");
        assert!(state.validate_step(Step::OriginalWork));

        state.update_field(Field::OriginalLink, "ftp://example.com");
        assert!(!state.validate_step(Step::OriginalWork));
        assert_eq!(state.field_error(Field::OriginalLink), Some(MSG_ORIGINAL_LINK));

        state.update_field(Field::OriginalLink, "https://example.com");
        assert!(state.validate_step(Step::OriginalWork));
    }

    #[test]
    fn test_advance_blocked_on_invalid_step() {
        let mut state = WizardState::new();
        assert_eq!(state.advance(), Advance::Blocked);
        assert_eq!(state.step(), Step::Contact);
    }

    #[test]
    fn test_advance_through_all_steps() {
        let mut state = filled();
        assert_eq!(state.advance(), Advance::Moved(Step::Recording));
        assert_eq!(state.advance(), Advance::Moved(Step::OriginalWork));
        assert_eq!(state.advance(), Advance::Submit);
        assert_eq!(state.step(), Step::OriginalWork);
    }

    #[test]
    fn test_retreat_clears_errors_and_floors() {
        let mut state = filled();
        state.advance();
        state.update_field(Field::ArtistName, "");
        assert_eq!(state.advance(), Advance::Blocked);
        assert!(!state.field_errors().is_empty());

        assert_eq!(state.retreat(), Step::Contact);
        assert!(state.field_errors().is_empty());
        assert_eq!(state.retreat(), Step::Contact);
    }

    #[test]
    fn test_lookup_status_mapping() {
        let mut state = WizardState::new();

        state.apply_lookup_status(&LookupStatus::Loading);
        assert!(state.is_loading());

        state.apply_lookup_status(&LookupStatus::Error(LookupFailure::MissingRecordingId));
        assert!(!state.is_loading());
        assert_eq!(state.submission_error(), Some(MSG_LOOKUP_FAILED));

        state.apply_lookup_status(&LookupStatus::Loading);
        state.apply_lookup_status(&LookupStatus::Ready(crate::wizard::tests::sample_work()));
        assert!(!state.is_loading());
        assert_eq!(state.submission_error(), None);
    }

    #[test]
    fn test_submission_failure_and_retry() {
        let mut state = filled();
        state.begin_submission();
        assert!(state.is_loading());
        assert!(!state.can_advance());

        state.fail_submission();
        assert!(!state.is_loading());
        assert_eq!(state.submission_error(), Some(MSG_SUBMISSION_FAILED));

        state.begin_submission();
        assert_eq!(state.submission_error(), None);
    }

    #[test]
    fn test_back_disabled_on_first_step_or_while_loading() {
        let mut state = filled();
        assert!(!state.can_go_back());
        state.advance();
        assert!(state.can_go_back());
        state.dispatch(Action::SetLoading(true));
        assert!(!state.can_go_back());
    }
}
