//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mock transport is scripted per test rather than generated, so tests
//! control exactly what the "network" returns and when.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
