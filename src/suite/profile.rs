use std::path::PathBuf;

use crate::platform::Arch;

/// The external conformance suites this crate knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestSuite {
    Test262,
    TestNashorn,
    TestV8,
}

/// Working directory of a suite run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkDir {
    SuiteRoot,
    /// The extracted suite directory itself.
    Destination,
}

/// Fixed parameters of one suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteProfile {
    pub name: &'static str,
    /// Extraction directory, relative to the suite root.
    pub destination: PathBuf,
    /// Archives extracted into `destination`, in order.
    pub artifacts: Vec<String>,
    pub default_vm_args: Vec<String>,
    pub max_heap: String,
    pub stack_size: String,
    pub main_class: String,
    pub work_dir: WorkDir,
}

impl TestSuite {
    pub const ALL: [TestSuite; 3] = [TestSuite::Test262, TestSuite::TestNashorn, TestSuite::TestV8];

    pub fn profile(self, arch: Arch) -> SuiteProfile {
        let large = arch == Arch::LargeStack;
        match self {
            TestSuite::Test262 => SuiteProfile {
                name: "test262",
                destination: PathBuf::from("lib").join("test262"),
                artifacts: strings(&["TEST262"]),
                default_vm_args: strings(&["-Dpolyglot.js.test262-mode=true"]),
                max_heap: "4g".into(),
                stack_size: if large { "2m" } else { "1m" }.into(),
                main_class: "com.oracle.truffle.js.test.external.test262.Test262".into(),
                work_dir: WorkDir::SuiteRoot,
            },
            TestSuite::TestNashorn => SuiteProfile {
                name: "testnashorn",
                destination: PathBuf::from("lib").join("testnashorn"),
                artifacts: strings(&["TESTNASHORN", "TESTNASHORN_EXTERNAL"]),
                default_vm_args: strings(&[
                    "-Dtruffle.js.NashornCompatibilityMode=true",
                    "-Dtruffle.js.U180EWhitespace=true",
                ]),
                max_heap: "2g".into(),
                stack_size: if large { "2m" } else { "1m" }.into(),
                main_class: "com.oracle.truffle.js.test.external.nashorn.TestNashorn".into(),
                work_dir: WorkDir::Destination,
            },
            TestSuite::TestV8 => SuiteProfile {
                name: "testv8",
                destination: PathBuf::from("lib").join("testv8"),
                artifacts: strings(&["TESTV8"]),
                default_vm_args: Vec::new(),
                max_heap: "8g".into(),
                stack_size: if large { "3m" } else { "1m" }.into(),
                main_class: "com.oracle.truffle.js.test.external.testv8.TestV8".into(),
                work_dir: WorkDir::SuiteRoot,
            },
        }
    }
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
