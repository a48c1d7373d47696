//! Utility functions and helpers.
//!
//! Common functionality used across the pandalink crates.

pub mod path;

// Re-export commonly used utilities
pub use path::{ascend, normalize_path};
