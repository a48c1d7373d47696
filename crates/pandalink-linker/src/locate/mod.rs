//! Runtime discovery.
//!
//! The runtime counts as installed when a Python interpreter on the host
//! can import its package. The package's `__file__` gives the install.

use pandalink_core::error::{LinkError, LinkResult};
use pandalink_core::types::RuntimeInstall;
use std::ffi::{OsStr, OsString};
use std::fmt;
use tracing::{debug, info};

use crate::config::LinkConfig;
use crate::process::{CommandRunner, SystemRunner};

/// Finds the installed runtime on the host
pub trait RuntimeLocator: fmt::Debug {
    fn locate(&self) -> LinkResult<RuntimeInstall>;
}

/// Locator that asks Python interpreters to import the package
#[derive(Debug)]
pub struct PythonLocator<R = SystemRunner> {
    interpreters: Vec<String>,
    package: String,
    runner: R,
}

impl PythonLocator {
    pub fn from_config(config: &LinkConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> PythonLocator<R> {
    pub fn with_runner(config: &LinkConfig, runner: R) -> Self {
        Self {
            interpreters: config.interpreters.clone(),
            package: config.package.clone(),
            runner,
        }
    }

    /// Arguments that make the interpreter print the package's file
    pub fn probe_args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-c"),
            OsString::from(format!(
                "import {pkg}, sys; sys.stdout.write({pkg}.__file__)",
                pkg = self.package
            )),
        ]
    }

    fn probe(&self, interpreter: &str) -> Option<RuntimeInstall> {
        let output = match self.runner.run(OsStr::new(interpreter), &self.probe_args()) {
            Ok(output) => output,
            Err(e) => {
                debug!("Interpreter {} unavailable: {}", interpreter, e);
                return None;
            }
        };

        if !output.success() {
            debug!(
                "{} could not import {} (exit {:?}): {}",
                interpreter,
                self.package,
                output.code,
                output.stderr.trim()
            );
            return None;
        }

        let module_file = output.stdout.trim();
        if module_file.is_empty() {
            debug!("{} reported no file for {}", interpreter, self.package);
            return None;
        }

        let install = RuntimeInstall::from_module_file(module_file);
        if install.is_none() {
            debug!("{} is too shallow to be an install", module_file);
        }
        install
    }
}

impl<R: CommandRunner> RuntimeLocator for PythonLocator<R> {
    fn locate(&self) -> LinkResult<RuntimeInstall> {
        for interpreter in &self.interpreters {
            if let Some(install) = self.probe(interpreter) {
                info!("Found {} via {} at {}", self.package, interpreter, install.root.display());
                return Ok(install);
            }
        }

        Err(LinkError::RuntimeNotFound {
            package: self.package.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;
    use std::path::PathBuf;

    fn config(interpreters: &[&str]) -> LinkConfig {
        let mut config = LinkConfig::new("/project");
        config.interpreters = interpreters.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn test_locate_first_interpreter() {
        let runner = ScriptedRunner::new();
        runner.push_exit(0, "/opt/panda3d/pandac/__init__.py\n");

        let locator = PythonLocator::with_runner(&config(&["python3", "python"]), runner.clone());
        let install = locator.locate().unwrap();

        assert_eq!(install.root, PathBuf::from("/opt/panda3d"));
        assert_eq!(runner.calls().len(), 1);
        assert_eq!(runner.calls()[0].0, OsString::from("python3"));
    }

    #[test]
    fn test_locate_falls_through_candidates() {
        let runner = ScriptedRunner::new();
        runner.push_spawn_error();
        runner.push_exit(1, "");
        runner.push_exit(0, "/usr/share/panda3d/pandac/__init__.py");

        let locator = PythonLocator::with_runner(&config(&["a", "b", "c"]), runner.clone());
        let install = locator.locate().unwrap();

        assert_eq!(install.root, PathBuf::from("/usr/share/panda3d"));
        let programs: Vec<_> = runner.calls().into_iter().map(|(program, _)| program).collect();
        assert_eq!(programs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_locate_not_found() {
        let runner = ScriptedRunner::new();
        runner.push_exit(1, "");
        runner.push_exit(0, "   ");

        let locator = PythonLocator::with_runner(&config(&["python3", "python"]), runner.clone());
        let result = locator.locate();

        assert!(matches!(result, Err(LinkError::RuntimeNotFound { ref package }) if package == "pandac"));
        assert_eq!(runner.calls().len(), 2);
    }

    #[test]
    fn test_locate_rejects_shallow_path() {
        let runner = ScriptedRunner::new();
        runner.push_exit(0, "__init__.py");

        let locator = PythonLocator::with_runner(&config(&["python3"]), runner);
        assert!(matches!(locator.locate(), Err(LinkError::RuntimeNotFound { .. })));
    }

    #[test]
    fn test_probe_args() {
        let locator = PythonLocator::with_runner(&config(&["python3"]), ScriptedRunner::new());
        let args = locator.probe_args();

        assert_eq!(args[0], OsString::from("-c"));
        assert_eq!(
            args[1],
            OsString::from("import pandac, sys; sys.stdout.write(pandac.__file__)")
        );
    }
}
