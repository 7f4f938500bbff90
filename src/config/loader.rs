use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Name of the per-suite config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "jsgate.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the user-wide configuration file.
    ///
    /// Uses `~/.config/jsgate/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("jsgate").join("config.toml")
    }

    /// Loads configuration using the lookup order:
    ///
    /// 1. `explicit`, which must exist
    /// 2. `./jsgate.toml`
    /// 3. [`Config::config_path`]
    /// 4. `Config::default()`
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }

        let user = Self::config_path();
        if user.exists() {
            return Self::load_from(&user);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Loads and validates configuration from `path`.
    ///
    /// A relative `suite.dir` is resolved against the file's directory.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        if config.suite.dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.suite.dir = parent.join(&config.suite.dir);
            }
        }

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The Java executable is set
    /// - The primary branch is set
    /// - The deploy command has a program
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suite.java.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "suite.java must name a Java executable".to_string(),
            });
        }

        if self.suite.primary_branch.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "suite.primary_branch must not be empty".to_string(),
            });
        }

        if self.deploy.command.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "deploy.command must contain at least a program".to_string(),
            });
        }

        Ok(())
    }
}
