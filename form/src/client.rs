//! HTTP client for the submission endpoint
//!
//! Posts a validated lead either to the third-party form service or to the
//! waitlist API's `/submit-lead` handler. Both answer a 2xx on success.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Deserialize;

use crate::error::TransportError;
use crate::form::{SubmitAck, Submitter};
use crate::schema::LeadPayload;

/// HTTP client for delivering leads
#[derive(Clone)]
pub struct SubmissionClient {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl SubmissionClient {
    /// Create a client for `endpoint`.
    ///
    /// A missing endpoint is not an error here; every submit will fail with
    /// a configuration error instead.
    pub fn new(endpoint: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.map(str::to_string),
        })
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

/// Success body from the waitlist API; other services answer differently
#[derive(Debug, Deserialize)]
struct HandlerAck {
    #[serde(default)]
    id: Option<String>,
}

fn parse_ack(body: &str) -> SubmitAck {
    let reference = serde_json::from_str::<HandlerAck>(body)
        .ok()
        .and_then(|ack| ack.id);
    SubmitAck { reference }
}

#[async_trait]
impl Submitter for SubmissionClient {
    async fn submit(&self, payload: &LeadPayload) -> Result<SubmitAck, TransportError> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            TransportError::Config(
                "no submission endpoint configured (set FORM_ENDPOINT or FORMSPREE_FORM_ID)"
                    .to_string(),
            )
        })?;

        let response = self.client.post(endpoint).json(payload).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(TransportError::Http {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(%status, "Submission accepted");
        Ok(parse_ack(&body))
    }
}
