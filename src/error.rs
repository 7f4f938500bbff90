use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while assembling command lines, fetching suites or
/// launching processes.
#[derive(Debug, Error)]
pub enum GateError {
    /// A flag that requires a value was the last token.
    #[error("{flag} must be followed by a classpath")]
    Argument { flag: String },

    /// Test discovery found nothing to run.
    #[error("Did not find any smoketests in '{dir}'")]
    SuiteNotFound { dir: PathBuf },

    /// A launched process exited non-zero and the caller asked for that to be fatal.
    #[error("'{command}' exited with status {status}")]
    SubprocessFailure { command: String, status: i32 },

    #[error("Unknown artifact '{name}'")]
    UnknownArtifact { name: String },

    #[error("Artifact '{name}' not found at '{path}'")]
    ArtifactMissing { name: String, path: PathBuf },

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract '{archive}': {source}")]
    Extract {
        archive: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{context} '{path}': {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GateError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}
