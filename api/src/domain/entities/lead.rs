//! Lead domain entity
//!
//! A prospective customer's contact and business details, as submitted
//! through the waitlist form.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier assigned to a lead by the tabular store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadRecordId(pub String);

impl std::fmt::Display for LeadRecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw inbound payload, before validation.
///
/// Every field is optional on the wire; `null` and absent are treated alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub messaging_platform: Option<String>,
    #[serde(default)]
    pub business_sector: Option<String>,
}

/// A validated lead. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    business_name: String,
    phone_number: String,
    email: String,
    website: String,
    messaging_platform: String,
    business_sector: String,
}

impl Lead {
    /// Validate a submission into a lead.
    ///
    /// Only business name and phone number are required; both must be
    /// non-empty after trimming. Missing optional fields become `""`.
    pub fn new(submission: LeadSubmission) -> Result<Self, DomainError> {
        let business_name = normalize(submission.business_name);
        let phone_number = normalize(submission.phone_number);

        if business_name.is_empty() || phone_number.is_empty() {
            return Err(DomainError::Validation(
                "Business name and phone number are required".to_string(),
            ));
        }

        Ok(Self {
            business_name,
            phone_number,
            email: normalize(submission.email),
            website: normalize(submission.website),
            messaging_platform: normalize(submission.messaging_platform),
            business_sector: normalize(submission.business_sector),
        })
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn messaging_platform(&self) -> &str {
        &self.messaging_platform
    }

    pub fn business_sector(&self) -> &str {
        &self.business_sector
    }
}

fn normalize(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
