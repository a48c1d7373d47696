//! # pandalink-core
//!
//! Core types and utilities shared by the pandalink crates.
//!
//! This crate provides:
//! - `LinkError` enum covering every way a link run can fail
//! - `RuntimeInstall`, `LinkKind` and `LinkOutcome` describing a run
//! - Path helpers for deriving the install root and link target
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (RuntimeInstall, LinkOutcome, etc.)
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{LinkError, LinkResult};
pub use types::{LinkKind, LinkOutcome, RuntimeInstall};
