//! Test utilities
//!
//! Manual mock implementations of the ports and fixtures for unit tests.
//!
//! Mocks are hand-written so each test scripts exactly what a port returns,
//! including delayed responses for exercising the stale-fetch guard.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
