//! Binary deployment, gated on the active branch.

use crate::config::ConfigError;
use crate::context::GateContext;
use crate::error::GateError;
use crate::process::{run_command, CommandSpec, ExitPolicy, OutputTarget};

/// What a deploy request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The deploy command ran and exited with this status.
    Deployed(i32),
    /// Not on the primary branch; nothing ran.
    Skipped { active: String, primary: String },
}

impl DeployOutcome {
    /// Process exit status for this outcome; a skip counts as success.
    pub fn status(&self) -> i32 {
        match self {
            DeployOutcome::Deployed(status) => *status,
            DeployOutcome::Skipped { .. } => 0,
        }
    }
}

/// Ask git for the branch checked out in the suite root.
pub fn active_branch(ctx: &GateContext<'_>) -> Result<String, GateError> {
    let command = CommandSpec::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .cwd(ctx.suite_dir())
        .stderr(OutputTarget::Null);
    let (status, stdout) = ctx.executor.capture(&command)?;
    if status != 0 {
        return Err(GateError::SubprocessFailure {
            command: command.to_string(),
            status,
        });
    }
    Ok(stdout.trim().to_string())
}

/// Deploy binaries if the active branch is the primary one.
pub fn deploy_if_primary_branch(
    ctx: &GateContext<'_>,
    args: &[String],
) -> Result<DeployOutcome, GateError> {
    let primary = ctx.config.suite.primary_branch.clone();
    let active = active_branch(ctx)?;

    if active != primary {
        tracing::warn!(
            "The active branch is \"{}\". Binaries are deployed only if the active branch is \"{}\".",
            active,
            primary
        );
        return Ok(DeployOutcome::Skipped { active, primary });
    }

    let Some((program, leading)) = ctx.config.deploy.command.split_first() else {
        return Err(ConfigError::ValidationError {
            message: "deploy.command must contain at least a program".to_string(),
        }
        .into());
    };
    let command = CommandSpec::new(program.clone())
        .args(leading.iter().cloned())
        .args(args.iter().cloned())
        .cwd(ctx.suite_dir());
    let status = run_command(ctx.executor, &command, ExitPolicy::ReturnStatus)?;
    Ok(DeployOutcome::Deployed(status))
}
