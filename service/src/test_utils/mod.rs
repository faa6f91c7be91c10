//! Test utilities
//!
//! Manual fakes and test fixtures for unit testing.
//!
//! The recording fakes share a single `CallLog`, so a test can check the order
//! in which the gateways were called. For strict expectations on a single
//! gateway, the mockall mocks generated on the port traits are used instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
