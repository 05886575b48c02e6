//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod airtable;
pub mod resend;

pub use airtable::AirtableLeadStore;
pub use resend::ResendNotifier;
