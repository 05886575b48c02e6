//! Lead form state machine
//!
//! Editing → Submitting → Success, with a way back to a blank form.
//! A failed delivery returns to Editing with the values kept.

use async_trait::async_trait;

use crate::error::{FormError, TransportError};
use crate::schema::{Field, FieldErrors, LeadInput, LeadPayload};

/// What the submission endpoint told us on success
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitAck {
    /// Record id, when the endpoint returns one
    pub reference: Option<String>,
}

/// Delivers a validated lead
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &LeadPayload) -> Result<SubmitAck, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    /// Request in flight; resubmission is refused
    Submitting,
    Success,
}

/// Toast-style message shown after a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::Success => "Success!",
            Notice::Failure => "Error",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Notice::Success => "Thanks for signing up! We'll reach out soon.",
            Notice::Failure => "Something went wrong. Please try again.",
        }
    }
}

pub struct LeadForm<S: Submitter> {
    submitter: S,
    input: LeadInput,
    state: FormState,
    errors: FieldErrors,
    notice: Option<Notice>,
    reference: Option<String>,
}

impl<S: Submitter> LeadForm<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            input: LeadInput::default(),
            state: FormState::Editing,
            errors: FieldErrors::default(),
            notice: None,
            reference: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn input(&self) -> &LeadInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut LeadInput {
        &mut self.input
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);
    }

    /// Field errors from the last submit attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Record id returned for the last successful submission
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Validate and enter `Submitting`.
    ///
    /// On a schema failure the form stays in `Editing` with field errors set,
    /// and nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<LeadPayload, FormError> {
        match self.state {
            FormState::Submitting => return Err(FormError::Busy),
            FormState::Success => return Err(FormError::Completed),
            FormState::Editing => {}
        }

        self.notice = None;
        match self.input.validate() {
            Ok(payload) => {
                self.errors = FieldErrors::default();
                self.state = FormState::Submitting;
                Ok(payload)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(FormError::Schema(errors))
            }
        }
    }

    /// Apply the delivery result of a submission started by `begin_submit`.
    pub fn finish_submit(
        &mut self,
        result: Result<SubmitAck, TransportError>,
    ) -> Result<(), FormError> {
        match result {
            Ok(ack) => {
                self.input = LeadInput::default();
                self.reference = ack.reference;
                self.state = FormState::Success;
                self.notice = Some(Notice::Success);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Form submission error: {}", e);
                self.state = FormState::Editing;
                self.notice = Some(Notice::Failure);
                Err(FormError::Transport(e))
            }
        }
    }

    /// Validate, deliver once, and settle the state.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let payload = self.begin_submit()?;
        let result = self.submitter.submit(&payload).await;
        self.finish_submit(result)
    }

    /// Leave the success panel for a blank form
    pub fn submit_another(&mut self) {
        self.input = LeadInput::default();
        self.errors = FieldErrors::default();
        self.notice = None;
        self.reference = None;
        self.state = FormState::Editing;
    }
}
