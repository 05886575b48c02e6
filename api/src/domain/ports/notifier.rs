//! Notification port trait
//!
//! Defines the interface for the email service used to announce new leads.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::NotifyError;

/// A rendered email, ready to hand to the email service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Port trait for sending lead notifications
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    /// Send the email. Returns the provider's message id.
    async fn send(&self, email: &NotificationEmail) -> Result<String, NotifyError>;
}
