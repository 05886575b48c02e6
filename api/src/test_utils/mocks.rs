//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Lead, LeadRecordId};
use crate::domain::ports::{LeadNotifier, LeadStore, NotificationEmail};
use crate::error::{NotifyError, StoreError};

// ============================================================================
// In-Memory Lead Store
// ============================================================================

/// A record written to the in-memory store
#[derive(Debug, Clone)]
pub struct StoredLead {
    pub id: LeadRecordId,
    pub lead: Lead,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct InMemoryLeadStore {
    records: Arc<RwLock<Vec<StoredLead>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(true)),
        }
    }

    /// All records written so far, in write order
    pub fn records(&self) -> Vec<StoredLead> {
        self.records.read().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn create(
        &self,
        lead: &Lead,
        submitted_at: DateTime<Utc>,
    ) -> Result<LeadRecordId, StoreError> {
        if *self.should_fail.read().unwrap() {
            return Err(StoreError::Api {
                status: 422,
                message: "Mock failure".to_string(),
            });
        }

        let id = LeadRecordId(format!("rec{}", uuid::Uuid::new_v4().simple()));
        self.records.write().unwrap().push(StoredLead {
            id: id.clone(),
            lead: lead.clone(),
            submitted_at,
        });

        Ok(id)
    }
}

// ============================================================================
// Mock Notifier
// ============================================================================

/// A mock notifier that tracks send attempts
#[derive(Default)]
pub struct MockNotifier {
    attempts: Arc<RwLock<Vec<NotificationEmail>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(true)),
        }
    }

    /// Every email the service tried to send, including failed ones
    pub fn attempts(&self) -> Vec<NotificationEmail> {
        self.attempts.read().unwrap().clone()
    }
}

#[async_trait]
impl LeadNotifier for MockNotifier {
    async fn send(&self, email: &NotificationEmail) -> Result<String, NotifyError> {
        self.attempts.write().unwrap().push(email.clone());

        if *self.should_fail.read().unwrap() {
            return Err(NotifyError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        Ok("mock-email-id".to_string())
    }
}
