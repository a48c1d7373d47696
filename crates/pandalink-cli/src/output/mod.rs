//! Terminal output.
//!
//! Every user-facing line goes to stdout; logging goes to stderr through
//! tracing. Colors follow NO_COLOR and TTY detection.

pub mod errors;

use pandalink_core::error::LinkError;
use std::env;
use std::io::{self, IsTerminal};

/// ANSI styling that collapses to plain text when colors are off
#[derive(Debug, Clone, Copy)]
pub struct Style {
    enabled: bool,
}

impl Style {
    /// Detect color support from NO_COLOR and whether stdout is a terminal
    pub fn detect() -> Self {
        let enabled = env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
        Self { enabled }
    }

    fn paint(&self, code: u8, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(32, text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(31, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(2, text)
    }
}

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    style: Style,
    errors: errors::ErrorFormatter,
}

impl OutputHandler {
    pub fn new() -> Self {
        let style = Style::detect();
        Self {
            style,
            errors: errors::ErrorFormatter::with_style(style),
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.style.green("✓"), message);
    }

    /// Print a failed run's diagnostic
    pub fn failure(&self, error: &LinkError) {
        println!("{}", self.errors.format_error(error));
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
