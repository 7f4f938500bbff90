use std::fs::File;
use std::process::{Command, Stdio};

use crate::error::GateError;
use crate::process::command::{CommandSpec, OutputTarget};

/// Runs commands to completion.
///
/// Implementations block until the child exits; there is no timeout.
pub trait ProcessExecutor {
    /// Run `command` and return its exit status.
    fn run(&self, command: &CommandSpec) -> Result<i32, GateError>;

    /// Run `command` and return its exit status with captured stdout.
    fn capture(&self, command: &CommandSpec) -> Result<(i32, String), GateError>;
}

/// Whether a non-zero exit aborts the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    NonZeroIsFatal,
    ReturnStatus,
}

/// Run `command` through `executor`, applying `policy` to the exit status.
pub fn run_command(
    executor: &dyn ProcessExecutor,
    command: &CommandSpec,
    policy: ExitPolicy,
) -> Result<i32, GateError> {
    tracing::info!(cwd = ?command.cwd, "Running {}", command);
    let status = executor.run(command)?;
    if status != 0 {
        match policy {
            ExitPolicy::NonZeroIsFatal => {
                return Err(GateError::SubprocessFailure {
                    command: command.to_string(),
                    status,
                })
            }
            ExitPolicy::ReturnStatus => {
                tracing::debug!(status, "{} exited non-zero", command.program);
            }
        }
    }
    Ok(status)
}

/// Executes commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    fn build(&self, spec: &CommandSpec) -> Result<Command, GateError> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdout(stdio_for(&spec.stdout)?);
        cmd.stderr(stdio_for(&spec.stderr)?);
        Ok(cmd)
    }
}

impl ProcessExecutor for SystemExecutor {
    fn run(&self, command: &CommandSpec) -> Result<i32, GateError> {
        let status = self
            .build(command)?
            .status()
            .map_err(|source| GateError::Spawn {
                program: command.program.clone(),
                source,
            })?;
        Ok(exit_code(status))
    }

    fn capture(&self, command: &CommandSpec) -> Result<(i32, String), GateError> {
        let mut cmd = self.build(command)?;
        cmd.stdout(Stdio::piped());
        let output = cmd.output().map_err(|source| GateError::Spawn {
            program: command.program.clone(),
            source,
        })?;
        Ok((
            exit_code(output.status),
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

fn stdio_for(target: &OutputTarget) -> Result<Stdio, GateError> {
    match target {
        OutputTarget::Inherit => Ok(Stdio::inherit()),
        OutputTarget::Null => Ok(Stdio::null()),
        OutputTarget::File(path) => {
            let file =
                File::create(path).map_err(|e| GateError::io("Failed to create output file", path, e))?;
            Ok(Stdio::from(file))
        }
    }
}

/// Exit code, with signal deaths mapped to `128 + signal` on Unix.
fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
