//! Shared test utilities for artifactgen integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated assembly runs with temp directories
//! - Builder patterns for creating metadata and step registries

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
