//! Link strategies
//!
//! A strategy turns "link `target` to `source`" into filesystem calls for
//! one family of hosts. `for_host` picks one at startup.

use pandalink_core::error::{LinkError, LinkResult};
use pandalink_core::types::LinkKind;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::debug;

pub mod junction;

pub use junction::{junction_args, JunctionStrategy, JUNCTION_SHELL};

/// Creates directory symlinks
pub trait DirLinker: fmt::Debug {
    fn symlink_dir(&self, original: &Path, link: &Path) -> io::Result<()>;
}

/// Directory symlinks through the host's native call
#[derive(Debug, Default, Clone, Copy)]
pub struct HostLinker;

impl DirLinker for HostLinker {
    #[cfg(unix)]
    fn symlink_dir(&self, original: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(original, link)
    }

    /// # Limitations
    /// Windows treats symlink creation as a privileged action, so this usually
    /// fails unless Developer Mode is on or the process is elevated.
    #[cfg(windows)]
    fn symlink_dir(&self, original: &Path, link: &Path) -> io::Result<()> {
        std::os::windows::fs::symlink_dir(original, link)
    }

    #[cfg(not(any(unix, windows)))]
    fn symlink_dir(&self, _original: &Path, _link: &Path) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
    }
}

/// How the link gets created on this kind of host
pub trait LinkStrategy: fmt::Debug {
    fn name(&self) -> &'static str;

    /// Create a link at `target` that resolves to `source`
    fn create(&self, source: &Path, target: &Path) -> LinkResult<LinkKind>;
}

/// Symlink only. A failure is final.
#[derive(Debug, Default)]
pub struct SymlinkStrategy<L = HostLinker> {
    linker: L,
}

impl SymlinkStrategy {
    pub fn new() -> Self {
        Self::with_linker(HostLinker)
    }
}

impl<L: DirLinker> SymlinkStrategy<L> {
    pub fn with_linker(linker: L) -> Self {
        Self { linker }
    }
}

impl<L: DirLinker> LinkStrategy for SymlinkStrategy<L> {
    fn name(&self) -> &'static str {
        "symlink"
    }

    fn create(&self, source: &Path, target: &Path) -> LinkResult<LinkKind> {
        debug!("Symlinking {} -> {}", target.display(), source.display());

        self.linker
            .symlink_dir(source, target)
            .map(|_| LinkKind::Symlink)
            .map_err(|e| LinkError::LinkCreationFailed {
                target: target.to_path_buf(),
                source: e,
            })
    }
}

/// Strategy for the current host: junction fallback on Windows, plain
/// symlinks everywhere else
pub fn for_host() -> Box<dyn LinkStrategy> {
    if cfg!(windows) {
        Box::new(JunctionStrategy::new())
    } else {
        Box::new(SymlinkStrategy::new())
    }
}
