//! Resend email client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{LeadNotifier, NotificationEmail};
use crate::error::NotifyError;

/// Lead notifier backed by the Resend email API
pub struct ResendNotifier {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ResendNotifier {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[async_trait]
impl LeadNotifier for ResendNotifier {
    async fn send(&self, email: &NotificationEmail) -> Result<String, NotifyError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(NotifyError::MissingCredential("RESEND_API_KEY"))?;

        let response = self
            .http
            .post(self.emails_url())
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Deserialization(e.to_string()))?;

        Ok(sent.id)
    }
}
