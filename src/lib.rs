//! Launch and test orchestration for the JavaScript runtime.
//!
//! Assembles JVM command lines from raw launcher arguments, keeps extracted
//! conformance suites current, and runs suites, unit tests, smoke tests and
//! the gate task matrix through a [`process::ProcessExecutor`].

pub mod args;
pub mod component;
pub mod config;
pub mod context;
pub mod deploy;
pub mod error;
pub mod gate;
pub mod launcher;
pub mod logging;
pub mod platform;
pub mod process;
pub mod resolver;
pub mod smoketest;
pub mod suite;
pub mod unittest;

pub use context::GateContext;
pub use error::GateError;
