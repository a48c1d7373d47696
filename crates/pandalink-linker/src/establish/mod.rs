//! The link decision procedure.
//!
//! Locate the runtime, refuse packaged installs, leave an existing target
//! alone, otherwise hand the link to the strategy. The first error ends
//! the run.

use pandalink_core::error::{LinkError, LinkResult};
use pandalink_core::types::LinkOutcome;
use tracing::{debug, info};

use crate::config::LinkConfig;
use crate::locate::{PythonLocator, RuntimeLocator};
use crate::strategy::{self, LinkStrategy};


/// Links the located runtime into the project tree
#[derive(Debug)]
pub struct Establisher {
    config: LinkConfig,
    locator: Box<dyn RuntimeLocator>,
    strategy: Box<dyn LinkStrategy>,
}

impl Establisher {
    pub fn new(
        config: LinkConfig,
        locator: Box<dyn RuntimeLocator>,
        strategy: Box<dyn LinkStrategy>,
    ) -> Self {
        Self {
            config,
            locator,
            strategy,
        }
    }

    /// Establisher using the host's interpreters and link strategy
    pub fn for_host(config: LinkConfig) -> Self {
        let locator = Box::new(PythonLocator::from_config(&config));
        Self::new(config, locator, strategy::for_host())
    }

    /// Run the procedure once.
    ///
    /// An existing target is reported as `LinkOutcome::AlreadyExists` and left
    /// for the caller's build to deal with. The probe follows links, so a
    /// dangling link at the target goes on to the link attempt.
    pub fn establish(&self) -> LinkResult<LinkOutcome> {
        let install = self.locator.locate()?;
        let target = self.config.target_path();
        debug!(
            "Runtime root {}, link target {}, strategy {}",
            install.root.display(),
            target.display(),
            self.strategy.name()
        );

        if install.has_marker(&self.config.marker) {
            return Err(LinkError::UnsupportedInstallation {
                root: install.root,
                marker: self.config.marker.clone(),
            });
        }

        if target.exists() {
            info!("{} already exists, leaving it in place", target.display());
            return Ok(LinkOutcome::AlreadyExists { target });
        }

        let kind = self.strategy.create(&install.root, &target)?;
        info!("Created {} {} -> {}", kind, target.display(), install.root.display());

        Ok(LinkOutcome::Created {
            kind,
            target,
            source: install.root,
        })
    }
}
