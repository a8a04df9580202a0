//! Common test utilities for navtree CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus helpers to run the CLI
//! - Fixtures: Reusable sidebar documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
