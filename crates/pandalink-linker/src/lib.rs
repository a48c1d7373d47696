//! Runtime linking for pandalink
//!
//! This crate finds the installed Panda3D runtime and links it into a
//! project tree at `src/built_panda`. Host differences live behind the
//! `LinkStrategy` trait so the decision procedure in `establish` runs the
//! same on every platform.

pub mod config;
pub mod establish;
pub mod locate;
pub mod process;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use config::LinkConfig;
pub use establish::Establisher;
pub use locate::{PythonLocator, RuntimeLocator};
pub use process::{CommandRunner, ProcessOutput, SystemRunner};
pub use strategy::{DirLinker, HostLinker, JunctionStrategy, LinkStrategy, SymlinkStrategy};
