//! Common test utilities for gosplit
//!
//! Shared fixtures and assertions for the integration tests.

#![allow(dead_code)]

pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
