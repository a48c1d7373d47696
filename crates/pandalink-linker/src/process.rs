//! Subprocess execution.
//!
//! Both the runtime probe and the junction fallback go through
//! `CommandRunner`, so tests can count and script invocations.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::process::Command;
use tracing::debug;

/// Captured result of a finished subprocess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a program to completion and captures its output
pub trait CommandRunner: fmt::Debug {
    fn run(&self, program: &OsStr, args: &[OsString]) -> io::Result<ProcessOutput>;
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[OsString]) -> io::Result<ProcessOutput> {
        debug!("Running {:?} {:?}", program, args);

        let output = Command::new(program).args(args).output()?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
