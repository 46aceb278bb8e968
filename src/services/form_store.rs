//! Checkout form state: field values plus submission status.
//!
//! Transitions are a pure reducer over [`FormState`]. [`FormStore`] is the
//! explicit container event handlers mutate, and [`BookingSession`] drives
//! a store through one submission against a [`BookingSubmitter`].
//!
//! ```text
//! Idle --submit/invalid--> Failed(msg)
//! Idle|Failed|Succeeded --submit/valid--> Submitting --ok--> Succeeded(msg), fields reset
//!                                                    --err--> Failed(generic), fields kept
//! Failed|Succeeded --field edit--> Idle
//! ```

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::client::BookingSubmitter;
use crate::models::form::{BookingField, BookingFormData, SubmissionStatus};
use crate::services::validation::{validate, ValidationError};

pub const SUBMIT_SUCCEEDED_MESSAGE: &str = "Booking confirmed! Thank you for your reservation.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit booking. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub data: BookingFormData,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { field: BookingField, value: String },
    SubmitRequested,
    SubmissionSucceeded,
    SubmissionFailed,
}

/// What the caller must act on after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    SendBooking(BookingFormData),
    Rejected(ValidationError),
}

/// How a call to [`BookingSession::submit`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Invalid(ValidationError),
    SubmissionFailed,
    AlreadySubmitting,
}

/// Apply one event to the form state
pub fn reduce(mut state: FormState, event: FormEvent) -> (FormState, Option<FormEffect>) {
    match event {
        FormEvent::FieldChanged { field, value } => {
            match state.status {
                SubmissionStatus::Submitting => {
                    debug!("Ignoring edit of {} while a submission is in flight", field);
                }
                _ => {
                    state.data.set(field, value);
                    state.status = SubmissionStatus::Idle;
                }
            }
            (state, None)
        }
        FormEvent::SubmitRequested => {
            if state.status.is_submitting() {
                debug!("Submit requested while already submitting, ignoring");
                return (state, None);
            }
            match validate(&state.data) {
                Err(reason) => {
                    state.status = SubmissionStatus::Failed(reason.to_string());
                    (state, Some(FormEffect::Rejected(reason)))
                }
                Ok(()) => {
                    state.status = SubmissionStatus::Submitting;
                    let snapshot = state.data.clone();
                    (state, Some(FormEffect::SendBooking(snapshot)))
                }
            }
        }
        FormEvent::SubmissionSucceeded => {
            if state.status.is_submitting() {
                state.data = BookingFormData::default();
                state.status = SubmissionStatus::Succeeded(SUBMIT_SUCCEEDED_MESSAGE.to_string());
            } else {
                warn!("Submission success arrived outside of a submission, ignoring");
            }
            (state, None)
        }
        FormEvent::SubmissionFailed => {
            if state.status.is_submitting() {
                state.status = SubmissionStatus::Failed(SUBMIT_FAILED_MESSAGE.to_string());
            } else {
                warn!("Submission failure arrived outside of a submission, ignoring");
            }
            (state, None)
        }
    }
}

/// State container owned by one form session
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: FormState,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Option<FormEffect> {
        let (next, effect) = reduce(std::mem::take(&mut self.state), event);
        self.state = next;
        effect
    }

    /// Set one field. No validation happens until submit.
    pub fn update_field(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        if field.is_sensitive() {
            debug!("Updating {}", field);
        } else {
            debug!("Updating {} to {:?}", field, value);
        }
        self.dispatch(FormEvent::FieldChanged { field, value });
    }

    pub fn snapshot(&self) -> &BookingFormData {
        &self.state.data
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.state.status
    }
}

/// One mounted checkout form: a store plus the client it submits through
pub struct BookingSession {
    store: FormStore,
    submitter: Arc<dyn BookingSubmitter>,
}

impl BookingSession {
    pub fn new(submitter: Arc<dyn BookingSubmitter>) -> Self {
        Self {
            store: FormStore::new(),
            submitter,
        }
    }

    /// Start a session pre-filled with every field of `data`
    pub fn with_form(submitter: Arc<dyn BookingSubmitter>, data: BookingFormData) -> Self {
        let mut session = Self::new(submitter);
        for field in BookingField::ALL {
            session.update_field(field, data.get(field));
        }
        session
    }

    pub fn update_field(&mut self, field: BookingField, value: impl Into<String>) {
        self.store.update_field(field, value);
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FormStore {
        &mut self.store
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.store.status()
    }

    /// Validate and, when valid, send the current snapshot.
    ///
    /// The resulting status is left on the store; a call made while a
    /// submission is already in flight does nothing.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let snapshot = match self.store.dispatch(FormEvent::SubmitRequested) {
            Some(FormEffect::SendBooking(snapshot)) => snapshot,
            Some(FormEffect::Rejected(reason)) => {
                info!("Booking form rejected: {}", reason);
                return SubmitOutcome::Invalid(reason);
            }
            None => return SubmitOutcome::AlreadySubmitting,
        };

        info!("Booking form valid, submitting");
        match self.submitter.submit_booking(&snapshot).await {
            Ok(()) => {
                info!("Booking submitted successfully");
                self.store.dispatch(FormEvent::SubmissionSucceeded);
                SubmitOutcome::Submitted
            }
            Err(err) => {
                error!("Failed to submit booking: {}", err);
                self.store.dispatch(FormEvent::SubmissionFailed);
                SubmitOutcome::SubmissionFailed
            }
        }
    }
}
