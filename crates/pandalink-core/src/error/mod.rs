//! Error types and result aliases for link operations.
//!
//! Every failure a link run can hit is one variant here. None are retried;
//! the binary reports the first one and exits with `exit_code()`.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all link operations
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Panda3D not found on system (could not import {package})")]
    RuntimeNotFound { package: String },

    #[error(
        "Panda3D at {} was installed from a packaged distribution ('{marker}' present), which cannot be linked",
        root.display()
    )]
    UnsupportedInstallation { root: PathBuf, marker: String },

    #[error("Panda3D found on system, but could not create a link at {}", target.display())]
    LinkCreationFailed {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Junction command failed for {} with exit status {code}", target.display())]
    JunctionCreationFailed { target: PathBuf, code: i32 },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for link operations
pub type LinkResult<T> = Result<T, LinkError>;

impl LinkError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Process exit status for this error.
    ///
    /// A failed junction command hands its own status back to the caller;
    /// everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LinkError::JunctionCreationFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            LinkError::RuntimeNotFound { .. } => {
                Some("Build and install Panda3D from source, or pass --python to pick an interpreter")
            },
            LinkError::UnsupportedInstallation { .. } => {
                Some("Point the build at a source-built Panda3D instead of the pip wheel")
            },
            LinkError::LinkCreationFailed { .. } => {
                Some("Check write permissions on the project's src directory")
            },
            LinkError::JunctionCreationFailed { .. } => {
                Some("Enable Developer Mode or run from an elevated prompt")
            },
            _ => None,
        }
    }
}
