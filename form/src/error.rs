//! Error types for the waitlist form

use thiserror::Error;

use crate::schema::FieldErrors;

/// Failure to deliver a valid lead to the submission endpoint
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Submission rejected ({status}): {body}")]
    Http { status: u16, body: String },
}

/// Why a submit action did not reach the success state
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Please fix the highlighted fields: {0}")]
    Schema(FieldErrors),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("A submission is already in progress")]
    Busy,

    #[error("The form was already submitted; start a new one first")]
    Completed,
}

impl From<FieldErrors> for FormError {
    fn from(errors: FieldErrors) -> Self {
        FormError::Schema(errors)
    }
}
