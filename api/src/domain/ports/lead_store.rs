//! Lead store port trait
//!
//! Defines the interface for the external tabular store that durably keeps leads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Lead, LeadRecordId};
use crate::error::StoreError;

/// Port trait for writing leads to the tabular store
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Create one record for the lead, stamped with `submitted_at`.
    ///
    /// Returns the identifier the store assigned to the new record.
    async fn create(
        &self,
        lead: &Lead,
        submitted_at: DateTime<Utc>,
    ) -> Result<LeadRecordId, StoreError>;
}
