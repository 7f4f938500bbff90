//! Artifact resolution: named archives to filesystem paths.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::config::Config;
use crate::error::GateError;

/// Maps artifact names to paths on disk.
pub trait ArtifactResolver {
    /// Path of the artifact, which must exist.
    fn resolve(&self, name: &str) -> Result<PathBuf, GateError>;

    /// Modification time of the resolved artifact.
    fn modified(&self, name: &str) -> Result<SystemTime, GateError> {
        let path = self.resolve(name)?;
        modified_time(&path)
    }
}

/// Resolves artifacts through the `[artifacts]` config table.
pub struct ConfigResolver<'a> {
    config: &'a Config,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl ArtifactResolver for ConfigResolver<'_> {
    fn resolve(&self, name: &str) -> Result<PathBuf, GateError> {
        let relative = self
            .config
            .artifacts
            .get(name)
            .ok_or_else(|| GateError::UnknownArtifact {
                name: name.to_string(),
            })?;
        let path = self.config.suite_path(relative);
        if !path.exists() {
            return Err(GateError::ArtifactMissing {
                name: name.to_string(),
                path,
            });
        }
        Ok(path)
    }
}

/// Modification time of any filesystem entry.
pub fn modified_time(path: &std::path::Path) -> Result<SystemTime, GateError> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| GateError::io("Failed to read modification time of", path, e))
}
