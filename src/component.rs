//! Language component metadata for the host distribution.

use serde::Serialize;

/// A launcher binary shipped with the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLauncher {
    /// Install location inside the distribution.
    pub destination: String,
    pub jar_distributions: Vec<String>,
    pub main_class: String,
    pub build_args: Vec<String>,
    pub language: String,
}

/// Registration record for a language component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    pub suite: String,
    pub name: String,
    pub short_name: String,
    pub license_files: Vec<String>,
    pub third_party_license_files: Vec<String>,
    pub truffle_jars: Vec<String>,
    pub support_distributions: Vec<String>,
    pub launcher_configs: Vec<LanguageLauncher>,
    pub boot_jars: Vec<String>,
    pub installable: bool,
}

const ASM_VERSION: &str = "7.1";

/// The JavaScript language component.
pub fn graaljs_component() -> ComponentSpec {
    let mut truffle_jars = vec!["graal-js:GRAALJS".to_string(), "graal-js:ICU4J".to_string()];
    truffle_jars.extend(
        ["ASM", "ASM_TREE", "ASM_ANALYSIS", "ASM_COMMONS", "ASM_UTIL"]
            .iter()
            .map(|jar| format!("graal-js:{}-{}", jar, ASM_VERSION)),
    );

    ComponentSpec {
        suite: "graal-js".into(),
        name: "Graal.js".into(),
        short_name: "js".into(),
        license_files: Vec::new(),
        third_party_license_files: Vec::new(),
        truffle_jars,
        support_distributions: vec!["graal-js:GRAALJS_GRAALVM_SUPPORT".into()],
        launcher_configs: vec![LanguageLauncher {
            destination: "bin/<exe:js>".into(),
            jar_distributions: vec!["graal-js:GRAALJS_LAUNCHER".into()],
            main_class: "com.oracle.truffle.js.shell.JSLauncher".into(),
            build_args: Vec::new(),
            language: "js".into(),
        }],
        boot_jars: vec!["graal-js:GRAALJS_SCRIPTENGINE".into()],
        installable: false,
    }
}

impl ComponentSpec {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
