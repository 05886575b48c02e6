//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod lead;

pub use lead::{Lead, LeadRecordId, LeadSubmission};
