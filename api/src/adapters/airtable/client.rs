//! Airtable lead store implementation

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::domain::entities::{Lead, LeadRecordId};
use crate::domain::ports::LeadStore;
use crate::error::StoreError;

/// Lead store backed by an Airtable base
pub struct AirtableLeadStore {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    base_id: Option<String>,
    table: String,
}

impl AirtableLeadStore {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        base_id: Option<String>,
        table: String,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            base_id,
            table,
        }
    }

    fn records_url(&self, base_id: &str) -> String {
        format!(
            "{}/v0/{}/{}",
            self.base_url,
            encode(base_id),
            encode(&self.table)
        )
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(StoreError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for the Airtable API
#[derive(Serialize)]
struct CreateRecordsRequest<'a> {
    records: Vec<NewRecord<'a>>,
}

#[derive(Serialize)]
struct NewRecord<'a> {
    fields: LeadFields<'a>,
}

/// Column mapping for the Leads table
#[derive(Serialize)]
struct LeadFields<'a> {
    #[serde(rename = "Name of Business")]
    business_name: &'a str,
    #[serde(rename = "Phone Number")]
    phone_number: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Business Website")]
    website: &'a str,
    #[serde(rename = "Messaging Platform")]
    messaging_platform: &'a str,
    #[serde(rename = "Business Sector")]
    business_sector: &'a str,
    #[serde(rename = "Signup Date")]
    signup_date: String,
}

impl<'a> LeadFields<'a> {
    fn new(lead: &'a Lead, submitted_at: DateTime<Utc>) -> Self {
        Self {
            business_name: lead.business_name(),
            phone_number: lead.phone_number(),
            email: lead.email(),
            website: lead.website(),
            messaging_platform: lead.messaging_platform(),
            business_sector: lead.business_sector(),
            signup_date: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Response types from the Airtable API
#[derive(Deserialize)]
struct CreateRecordsResponse {
    records: Vec<CreatedRecord>,
}

#[derive(Deserialize)]
struct CreatedRecord {
    id: String,
}

#[async_trait]
impl LeadStore for AirtableLeadStore {
    async fn create(
        &self,
        lead: &Lead,
        submitted_at: DateTime<Utc>,
    ) -> Result<LeadRecordId, StoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(StoreError::MissingCredential("AIRTABLE_API_KEY"))?;
        let base_id = self
            .base_id
            .as_deref()
            .ok_or(StoreError::MissingCredential("AIRTABLE_BASE_ID"))?;

        let body = CreateRecordsRequest {
            records: vec![NewRecord {
                fields: LeadFields::new(lead, submitted_at),
            }],
        };

        let response = self
            .http
            .post(self.records_url(base_id))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let created: CreateRecordsResponse = self.handle_response(response).await?;
        tracing::debug!(records = created.records.len(), "Airtable create acknowledged");

        created
            .records
            .into_iter()
            .next()
            .map(|record| LeadRecordId(record.id))
            .ok_or(StoreError::EmptyResponse)
    }
}
