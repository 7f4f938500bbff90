use std::path::PathBuf;

use crate::config::Config;
use crate::platform::Arch;
use crate::process::{CommandSpec, ProcessExecutor};
use crate::resolver::ArtifactResolver;

/// Everything an operation needs from the outside world.
///
/// Passed explicitly to every command instead of being looked up globally.
pub struct GateContext<'a> {
    pub config: &'a Config,
    pub executor: &'a dyn ProcessExecutor,
    pub resolver: &'a dyn ArtifactResolver,
    pub arch: Arch,
}

impl<'a> GateContext<'a> {
    pub fn new(
        config: &'a Config,
        executor: &'a dyn ProcessExecutor,
        resolver: &'a dyn ArtifactResolver,
    ) -> Self {
        Self {
            config,
            executor,
            resolver,
            arch: Arch::current(),
        }
    }

    pub fn with_arch(mut self, arch: Arch) -> Self {
        self.arch = arch;
        self
    }

    /// The suite root directory.
    pub fn suite_dir(&self) -> PathBuf {
        self.config.suite.dir.clone()
    }

    /// A Java invocation with the configured executable.
    pub fn java(&self, args: Vec<String>) -> CommandSpec {
        CommandSpec::new(self.config.suite.java.clone()).args(args)
    }
}
