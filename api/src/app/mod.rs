//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod lead_service;
pub mod notification;

pub use lead_service::LeadService;
pub use notification::NotificationSettings;
