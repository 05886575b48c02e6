//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod leads;

pub use leads::submit_lead;
