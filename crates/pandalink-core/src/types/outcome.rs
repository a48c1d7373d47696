//! Result of a successful link run.

use std::fmt;
use std::path::PathBuf;

/// Kind of filesystem link that was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Directory symbolic link
    Symlink,
    /// Windows directory junction
    Junction,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Symlink => write!(f, "symlink"),
            LinkKind::Junction => write!(f, "junction"),
        }
    }
}

/// What a link run did.
///
/// Both variants are successes; the caller decides whether to continue
/// with its build or exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new link was created at `target` pointing to `source`
    Created {
        kind: LinkKind,
        target: PathBuf,
        source: PathBuf,
    },
    /// Something was already at `target`; nothing was touched
    AlreadyExists { target: PathBuf },
}

impl LinkOutcome {
    /// Whether this run changed the filesystem
    pub fn is_created(&self) -> bool {
        matches!(self, LinkOutcome::Created { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_kind_display() {
        assert_eq!(LinkKind::Symlink.to_string(), "symlink");
        assert_eq!(LinkKind::Junction.to_string(), "junction");
    }

    #[test]
    fn test_is_created() {
        let created = LinkOutcome::Created {
            kind: LinkKind::Symlink,
            target: PathBuf::from("src/built_panda"),
            source: PathBuf::from("/opt/panda3d"),
        };
        assert!(created.is_created());

        let existing = LinkOutcome::AlreadyExists { target: PathBuf::from("src/built_panda") };
        assert!(!existing.is_created());
    }
}
