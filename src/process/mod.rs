//! Process execution boundary.
//!
//! Everything that leaves this crate (the JVM, git, the deploy tool, a JS
//! binary) goes through a [`ProcessExecutor`], so command assembly can be
//! tested against a recording implementation.

mod command;
mod executor;

pub use command::{CommandSpec, OutputTarget};
pub use executor::{run_command, ExitPolicy, ProcessExecutor, SystemExecutor};
