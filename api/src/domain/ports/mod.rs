//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod lead_store;
pub mod notifier;

pub use lead_store::LeadStore;
pub use notifier::{LeadNotifier, NotificationEmail};
