mod loader;
mod types;

pub use loader::{ConfigError, LOCAL_CONFIG_FILE};
pub use types::{
    ClasspathConfig, Config, DeployConfig, LauncherSettings, SuiteConfig, UnittestConfig,
};
