//! Windows junction fallback.

use pandalink_core::error::{LinkError, LinkResult};
use pandalink_core::types::LinkKind;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use tracing::{debug, warn};

use super::{DirLinker, HostLinker, LinkStrategy};
use crate::process::{CommandRunner, SystemRunner};

/// Shell that provides `mklink`
pub const JUNCTION_SHELL: &str = "cmd";

/// Shell arguments creating a junction at `target` pointing to `source`.
///
/// `/J` makes a junction, which unlike `symlink_dir` needs no Developer
/// Mode or elevation.
pub fn junction_args(target: &Path, source: &Path) -> Vec<OsString> {
    vec![
        OsString::from("/C"),
        OsString::from("mklink"),
        OsString::from("/J"),
        target.as_os_str().to_os_string(),
        source.as_os_str().to_os_string(),
    ]
}

/// Tries a symlink first and falls back to `mklink /J` once
#[derive(Debug, Default)]
pub struct JunctionStrategy<L = HostLinker, R = SystemRunner> {
    linker: L,
    runner: R,
}

impl JunctionStrategy {
    pub fn new() -> Self {
        Self::with_parts(HostLinker, SystemRunner)
    }
}

impl<L: DirLinker, R: CommandRunner> JunctionStrategy<L, R> {
    pub fn with_parts(linker: L, runner: R) -> Self {
        Self { linker, runner }
    }
}

impl<L: DirLinker, R: CommandRunner> LinkStrategy for JunctionStrategy<L, R> {
    fn name(&self) -> &'static str {
        "junction"
    }

    fn create(&self, source: &Path, target: &Path) -> LinkResult<LinkKind> {
        let err = match self.linker.symlink_dir(source, target) {
            Ok(()) => return Ok(LinkKind::Symlink),
            Err(e) => e,
        };
        warn!("Symlink at {} failed ({}), creating a junction", target.display(), err);

        let output = self
            .runner
            .run(OsStr::new(JUNCTION_SHELL), &junction_args(target, source))
            .map_err(|e| LinkError::io("Failed to run mklink".to_string(), e))?;

        if output.success() {
            debug!("mklink: {}", output.stdout.trim());
            Ok(LinkKind::Junction)
        } else {
            Err(LinkError::JunctionCreationFailed {
                target: target.to_path_buf(),
                code: output.code.unwrap_or(1),
            })
        }
    }
}
