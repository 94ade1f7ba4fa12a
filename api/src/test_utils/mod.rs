//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repository keeps entries in insertion order, matching the
//! SQL adapter, so service and router tests can assert on listing order.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
