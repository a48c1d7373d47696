//! Command implementations.
//!
//! There is a single operation, `link`; this module holds the context it
//! runs in and the flag-to-config resolution.

use pandalink_core::error::LinkResult;
use pandalink_linker::LinkConfig;
use std::path::PathBuf;
use tracing::debug;

pub mod link;


use crate::output::OutputHandler;

/// Shared context for commands
pub struct CommandContext {
    pub output: OutputHandler,
}

impl CommandContext {
    pub fn new() -> Self {
        Self {
            output: OutputHandler::new(),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the run configuration from the optional flags.
///
/// Without `--project-root` the root is found from the program's own path.
pub fn resolve_config(python: Option<String>, project_root: Option<PathBuf>) -> LinkResult<LinkConfig> {
    let mut config = match project_root {
        Some(root) => LinkConfig::new(root),
        None => LinkConfig::from_current_exe()?,
    };

    if let Some(python) = python {
        config = config.with_interpreter(python);
    }

    debug!("Resolved config: {:?}", config);
    Ok(config)
}
