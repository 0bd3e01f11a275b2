//! Common test utilities for Bootapp integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated home directory, hosts file and project directory,
//!   plus helpers to run the `bootapp` binary against them
//! - `RecordingTrustStore`: Trust store that only remembers what it was asked
//! - Fixtures: Reusable hosts file content

#![allow(dead_code)]

pub mod env;
pub mod fakes;
pub mod fixtures;

pub use env::*;
pub use fakes::*;
pub use fixtures::*;
