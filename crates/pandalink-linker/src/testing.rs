//! Recording fakes shared by the unit tests.

use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use pandalink_core::error::LinkResult;
use pandalink_core::types::RuntimeInstall;

use crate::locate::RuntimeLocator;
use crate::process::{CommandRunner, ProcessOutput};
use crate::strategy::DirLinker;

/// Runner that replays queued results and records every call
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    responses: Arc<Mutex<VecDeque<io::Result<ProcessOutput>>>>,
    calls: Arc<Mutex<Vec<(OsString, Vec<OsString>)>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_exit(&self, code: i32, stdout: &str) {
        self.responses.lock().unwrap().push_back(Ok(ProcessOutput {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }));
    }

    pub fn push_spawn_error(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(io::Error::from(io::ErrorKind::NotFound)));
    }

    pub fn calls(&self) -> Vec<(OsString, Vec<OsString>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &OsStr, args: &[OsString]) -> io::Result<ProcessOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_os_string(), args.to_vec()));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(io::Error::from(io::ErrorKind::NotFound)))
    }
}

/// Linker that records calls and either fails or defers to the host
#[derive(Debug, Clone, Default)]
pub struct RecordingLinker {
    fail: bool,
    calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
}

impl RecordingLinker {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn passthrough() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DirLinker for RecordingLinker {
    fn symlink_dir(&self, original: &Path, link: &Path) -> io::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((original.to_path_buf(), link.to_path_buf()));

        if self.fail {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        } else {
            crate::strategy::HostLinker.symlink_dir(original, link)
        }
    }
}

/// Locator returning a fixed module file, or nothing
#[derive(Debug, Clone)]
pub struct StaticLocator {
    module_file: Option<PathBuf>,
}

impl StaticLocator {
    pub fn found(module_file: impl Into<PathBuf>) -> Self {
        Self { module_file: Some(module_file.into()) }
    }

    pub fn missing() -> Self {
        Self { module_file: None }
    }
}

impl RuntimeLocator for StaticLocator {
    fn locate(&self) -> LinkResult<RuntimeInstall> {
        self.module_file
            .clone()
            .and_then(RuntimeInstall::from_module_file)
            .ok_or_else(|| pandalink_core::LinkError::RuntimeNotFound {
                package: "pandac".to_string(),
            })
    }
}
