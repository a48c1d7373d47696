//! `pandalink` link operation.
//!
//! Runs the establisher once and reports what happened on stdout.

use pandalink_core::error::LinkResult;
use pandalink_core::types::LinkOutcome;
use pandalink_linker::{Establisher, LinkConfig};

use super::CommandContext;

/// Link using the host's interpreters and link strategy
pub fn execute(config: LinkConfig, ctx: &CommandContext) -> LinkResult<LinkOutcome> {
    let establisher = Establisher::for_host(config);
    execute_with(&establisher, ctx)
}

pub fn execute_with(establisher: &Establisher, ctx: &CommandContext) -> LinkResult<LinkOutcome> {
    let outcome = establisher.establish()?;

    match &outcome {
        LinkOutcome::Created { kind, target, source } => {
            ctx.output.success(&format!(
                "Linked {} -> {} ({})",
                target.display(),
                source.display(),
                kind
            ));
        },
        LinkOutcome::AlreadyExists { target } => {
            ctx.output.info(&format!(
                "Panda3D directory already exists at {}",
                target.display()
            ));
        },
    }

    Ok(outcome)
}
