//! Resend adapter
//!
//! Implementation of the lead notifier on top of the Resend email API.

pub mod client;

pub use client::ResendNotifier;
