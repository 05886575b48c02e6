//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks record every call so tests can assert on what reached the
//! external services, and can be switched into a failing mode.

pub mod fixtures;
pub mod mocks;
pub mod upstream;

pub use fixtures::*;
pub use mocks::*;
pub use upstream::scripted_upstream;
