//! Core data types for a link run.
//!
//! This module provides:
//! - The located runtime installation
//! - The kind of link created and the outcome of a run

pub mod install;
pub mod outcome;

// Re-export all public types
pub use install::RuntimeInstall;
pub use outcome::{LinkKind, LinkOutcome};
