//! Path utilities for locating the install root and the link target.

use std::path::{Component, Path, PathBuf};

/// Walk `levels` parents up from `path`.
///
/// Returns `None` if the path runs out of parents first. An empty result
/// (a bare relative name ascended past its start) also counts as running out.
pub fn ascend(path: &Path, levels: usize) -> Option<&Path> {
    let mut current = path;
    for _ in 0..levels {
        current = current.parent()?;
    }

    if current.as_os_str().is_empty() {
        None
    } else {
        Some(current)
    }
}

/// Normalize a path by resolving . and .. components
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {
                // Skip current directory
            },
            Component::ParentDir => {
                match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    },
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {
                        // Can't go above the root
                    },
                    _ => components.push(component),
                }
            },
            other => {
                components.push(other);
            },
        }
    }

    components.iter().collect()
}
