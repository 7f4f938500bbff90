use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suite: SuiteConfig,
    #[serde(default)]
    pub classpath: ClasspathConfig,
    /// Artifact name → archive path (relative paths resolve against the suite root).
    #[serde(default)]
    pub artifacts: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pub launcher: LauncherSettings,
    #[serde(default)]
    pub unittest: UnittestConfig,
    #[serde(default)]
    pub deploy: DeployConfig,
}

/// Where the suite lives and how to reach the JVM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Suite root directory.
    #[serde(default = "default_suite_dir")]
    pub dir: PathBuf,
    /// Java executable used for every launch.
    #[serde(default = "default_java")]
    pub java: String,
    /// Branch from which binaries may be deployed.
    #[serde(default = "default_primary_branch")]
    pub primary_branch: String,
}

/// Classpath entries per launch flavour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClasspathConfig {
    /// Launcher and engine jars for `run-script`.
    #[serde(default)]
    pub launcher: Vec<String>,
    /// Test jars for conformance suites and unit tests.
    #[serde(default)]
    pub tests: Vec<String>,
    /// Optional tool jars (inspector, profiler). Appended when non-empty.
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Entry points for interactive launches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherSettings {
    #[serde(default = "default_launcher_main_class")]
    pub main_class: String,
    #[serde(default = "default_legacy_main_class")]
    pub legacy_main_class: String,
}

/// Unit-test launcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnittestConfig {
    #[serde(default = "default_unittest_main_class")]
    pub main_class: String,
    /// Package run by `run-unit-tests`.
    #[serde(default = "default_unittest_package")]
    pub package: String,
    /// Package run by the gate's `UnitTests` task.
    #[serde(default = "default_scriptengine_package")]
    pub scriptengine_package: String,
}

/// Binary deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Program and leading arguments; user arguments are appended.
    #[serde(default = "default_deploy_command")]
    pub command: Vec<String>,
}

fn default_suite_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_java() -> String {
    "java".to_string()
}

fn default_primary_branch() -> String {
    "master".to_string()
}

fn default_launcher_main_class() -> String {
    "com.oracle.truffle.js.shell.JSLauncher".to_string()
}

fn default_legacy_main_class() -> String {
    "jdk.nashorn.tools.Shell".to_string()
}

fn default_unittest_main_class() -> String {
    "com.oracle.mxtool.junit.MxJUnitWrapper".to_string()
}

fn default_unittest_package() -> String {
    "com.oracle.truffle.js.test".to_string()
}

fn default_scriptengine_package() -> String {
    "com.oracle.truffle.js.scriptengine.test".to_string()
}

fn default_deploy_command() -> Vec<String> {
    vec!["mx".to_string(), "deploy-binary".to_string()]
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            dir: default_suite_dir(),
            java: default_java(),
            primary_branch: default_primary_branch(),
        }
    }
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            main_class: default_launcher_main_class(),
            legacy_main_class: default_legacy_main_class(),
        }
    }
}

impl Default for UnittestConfig {
    fn default() -> Self {
        Self {
            main_class: default_unittest_main_class(),
            package: default_unittest_package(),
            scriptengine_package: default_scriptengine_package(),
        }
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            command: default_deploy_command(),
        }
    }
}

impl Config {
    /// Resolve `path` against the suite root unless it is absolute.
    pub fn suite_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.suite.dir.join(path)
        }
    }

    /// Launcher classpath, with tool jars when configured.
    pub fn launcher_classpath(&self) -> Vec<String> {
        self.with_tools(&self.classpath.launcher)
    }

    /// Test classpath, with tool jars when configured.
    pub fn tests_classpath(&self) -> Vec<String> {
        self.with_tools(&self.classpath.tests)
    }

    fn with_tools(&self, entries: &[String]) -> Vec<String> {
        entries
            .iter()
            .chain(self.classpath.tools.iter())
            .map(|entry| self.suite_path(entry).to_string_lossy().into_owned())
            .collect()
    }
}
