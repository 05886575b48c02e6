//! Lead service
//!
//! Handles a single lead submission: validate, store, then notify.

use std::sync::Arc;

use chrono::Utc;

use crate::app::notification::{compose_notification, NotificationSettings};
use crate::domain::entities::{Lead, LeadRecordId, LeadSubmission};
use crate::domain::ports::{LeadNotifier, LeadStore};
use crate::error::AppError;

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub record_id: LeadRecordId,
    /// Whether the notification email was accepted by the email service
    pub notified: bool,
}

/// Service for accepting waitlist leads
pub struct LeadService<LS, N>
where
    LS: LeadStore,
    N: LeadNotifier,
{
    store: Arc<LS>,
    notifier: Arc<N>,
    notification: NotificationSettings,
}

impl<LS, N> LeadService<LS, N>
where
    LS: LeadStore,
    N: LeadNotifier,
{
    pub fn new(store: Arc<LS>, notifier: Arc<N>, notification: NotificationSettings) -> Self {
        Self {
            store,
            notifier,
            notification,
        }
    }

    /// Accept a lead submission
    ///
    /// Steps run strictly in order:
    /// 1. Validate the required fields
    /// 2. Write the record to the store (failure aborts the request)
    /// 3. Send the notification email (failure is logged and swallowed)
    pub async fn submit(&self, submission: LeadSubmission) -> Result<SubmissionReceipt, AppError> {
        let lead = Lead::new(submission)?;
        tracing::info!(business_name = lead.business_name(), "Received lead submission");

        let submitted_at = Utc::now();
        let record_id = self.store.create(&lead, submitted_at).await?;
        tracing::info!(record_id = %record_id, "Lead stored");

        let email = compose_notification(&lead, submitted_at, &self.notification);
        let notified = match self.notifier.send(&email).await {
            Ok(message_id) => {
                tracing::info!(record_id = %record_id, message_id = %message_id, "Notification email sent");
                true
            }
            Err(e) => {
                tracing::error!(
                    target: "waitlist_api::notification",
                    record_id = %record_id,
                    recipient = %email.to,
                    error = %e,
                    "Notification email failed; lead is stored"
                );
                false
            }
        };

        Ok(SubmissionReceipt {
            record_id,
            notified,
        })
    }
}
