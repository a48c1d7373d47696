//! Located runtime installation.

use crate::utils::path::ascend;
use std::path::PathBuf;

/// Number of levels between the package's module file and the install root
/// (`<root>/pandac/__init__.py`).
pub const INSTALL_DEPTH: usize = 2;

/// A runtime package found on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInstall {
    /// File the interpreter reported for the imported package
    pub module_file: PathBuf,

    /// Installed runtime root, `INSTALL_DEPTH` levels above `module_file`
    pub root: PathBuf,
}

impl RuntimeInstall {
    /// Derive the install from the package's module file.
    ///
    /// Returns `None` when the file has too few ancestors to hold an install.
    pub fn from_module_file(module_file: impl Into<PathBuf>) -> Option<Self> {
        let module_file = module_file.into();
        let root = ascend(&module_file, INSTALL_DEPTH)?.to_path_buf();

        Some(Self { module_file, root })
    }

    /// Whether the install root contains the given marker directory
    pub fn has_marker(&self, marker: &str) -> bool {
        self.marker_path(marker).is_dir()
    }

    /// Path the marker directory would live at
    pub fn marker_path(&self, marker: &str) -> PathBuf {
        self.root.join(marker)
    }
}
