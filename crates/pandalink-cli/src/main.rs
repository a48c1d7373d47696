//! # pandalink
//!
//! Links an installed Panda3D runtime into a project's `src/built_panda`
//! so the build finds it without a configured path.
//!
//! This is the entry point. It parses the optional flags, sets up logging
//! and the panic hook, runs the link once and turns the result into the
//! process exit status.

use clap::Parser;
use pandalink_core::error::LinkResult;
use pandalink_core::types::LinkOutcome;
use std::path::PathBuf;
use tracing::{debug, error};

mod commands;
mod output;

use commands::CommandContext;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nBuilt: ",
    env!("BUILD_DATE"),
    "\nRust: ",
    env!("RUSTC_VERSION")
);

/// Link the installed Panda3D runtime into src/built_panda
#[derive(Parser, Debug)]
#[command(name = "pandalink", version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Python interpreter used to find Panda3D
    #[arg(long, value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Project root holding src/ (defaults to two levels above this program)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting pandalink v{}", env!("CARGO_PKG_VERSION"));

    let ctx = CommandContext::new();
    if let Err(err) = run_cli(cli, &ctx) {
        ctx.output.failure(&err);
        std::process::exit(err.exit_code());
    }
}

fn run_cli(cli: Cli, ctx: &CommandContext) -> LinkResult<LinkOutcome> {
    let config = commands::resolve_config(cli.python, cli.project_root)?;
    commands::link::execute(config, ctx)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pandalink_cli={},pandalink_linker={},pandalink_core={}",
            level, level, level
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("pandalink encountered an unexpected error: {}", panic_info);
        eprintln!("pandalink crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}
