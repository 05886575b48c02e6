//! Lead handlers
//!
//! Endpoint for the waitlist form submission.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

use crate::domain::entities::LeadSubmission;
use crate::domain::ports::{LeadNotifier, LeadStore};
use crate::error::AppError;
use crate::AppState;

/// Response body for a stored lead
#[derive(Debug, Serialize)]
pub struct SubmitLeadResponse {
    pub success: bool,
    /// Record id assigned by the tabular store
    pub id: String,
}

/// POST /submit-lead
///
/// Validate the lead, store it, and send the notification email.
/// Malformed JSON is reported as `AppError::Payload`.
pub async fn submit_lead<LS, N>(
    State(state): State<AppState<LS, N>>,
    body: Bytes,
) -> Result<Json<SubmitLeadResponse>, AppError>
where
    LS: LeadStore + 'static,
    N: LeadNotifier + 'static,
{
    let submission: LeadSubmission =
        serde_json::from_slice(&body).map_err(|e| AppError::Payload(e.to_string()))?;

    let receipt = state.lead_service.submit(submission).await?;

    Ok(Json(SubmitLeadResponse {
        success: true,
        id: receipt.record_id.0,
    }))
}
