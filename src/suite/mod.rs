//! External conformance suites: fetch the archives, run the runner.

mod fetch;
mod profile;
mod runner;

pub use fetch::{extract_archive, fetch_test_suite, needs_refresh, FetchOutcome};
pub use profile::{SuiteProfile, TestSuite, WorkDir};
pub use runner::{build_suite_command, run_suite_profile, run_test_suite};
