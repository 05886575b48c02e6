//! Airtable adapter
//!
//! Implementation of the lead store on top of the Airtable REST API.

pub mod client;

pub use client::AirtableLeadStore;
