//! Fixed inputs of a link run.
//!
//! Nothing is read from disk or the environment; defaults come from the
//! constants below and the CLI may override the project root and the
//! interpreter.

use pandalink_core::error::{LinkError, LinkResult};
use pandalink_core::utils::path::{ascend, normalize_path};
use std::io;
use std::path::{Path, PathBuf};

/// Python package whose location identifies the runtime
pub const DEFAULT_PACKAGE: &str = "pandac";

/// Directory only present in the binary wheel distribution
pub const DEFAULT_MARKER: &str = "panda3d_tools";

/// Link location relative to the project root
pub const DEFAULT_LINK_SUBPATH: &str = "src/built_panda";

/// Levels between the running program and the project root
/// (`<root>/scripts/pandalink`).
pub const ANCHOR_DEPTH: usize = 2;

/// Interpreters to try, in order
pub fn default_interpreters() -> Vec<String> {
    let names: &[&str] = if cfg!(windows) {
        &["python", "py"]
    } else {
        &["python3", "python"]
    };

    names.iter().map(|name| name.to_string()).collect()
}

/// Configuration for a single link run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Directory the link subpath is resolved against
    pub project_root: PathBuf,

    /// Link location under `project_root`
    pub link_subpath: PathBuf,

    /// Package to import when locating the runtime
    pub package: String,

    /// Subdirectory marking an unsupported packaged install
    pub marker: String,

    /// Interpreter candidates, tried in order
    pub interpreters: Vec<String>,
}

impl LinkConfig {
    /// Create a configuration with default settings rooted at `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            link_subpath: PathBuf::from(DEFAULT_LINK_SUBPATH),
            package: DEFAULT_PACKAGE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            interpreters: default_interpreters(),
        }
    }

    /// Root the configuration `ANCHOR_DEPTH` levels above `anchor`
    pub fn from_anchor(anchor: &Path) -> LinkResult<Self> {
        let root = ascend(anchor, ANCHOR_DEPTH).ok_or_else(|| {
            LinkError::io(
                format!("No project root {} levels above {}", ANCHOR_DEPTH, anchor.display()),
                io::Error::from(io::ErrorKind::NotFound),
            )
        })?;

        Ok(Self::new(root))
    }

    /// Root the configuration relative to the running executable.
    ///
    /// On Linux `current_exe` reads `/proc/self/exe`, which the kernel has
    /// already resolved, so a symlinked binary anchors at the real file
    /// rather than at the link. Use `--project-root` when running through
    /// a link.
    pub fn from_current_exe() -> LinkResult<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| LinkError::io("Failed to resolve the program's location".to_string(), e))?;

        Self::from_anchor(&exe)
    }

    /// Use exactly one interpreter instead of the candidate list
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreters = vec![interpreter.into()];
        self
    }

    /// Path the link is created at
    pub fn target_path(&self) -> PathBuf {
        self.project_root.join(normalize_path(&self.link_subpath))
    }
}
