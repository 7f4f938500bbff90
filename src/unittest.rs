//! Unit-test launches.

use crate::args::{partition, ArgAssembler, PATH_SEPARATOR};
use crate::context::GateContext;
use crate::error::GateError;
use crate::process::{run_command, CommandSpec, ExitPolicy};

/// Flags always passed to the unit-test runner.
pub const UNITTEST_FLAGS: &[&str] = &["--enable-timing", "--very-verbose"];

/// Build the unit-test runner invocation.
///
/// `runner_args` are partitioned; VM flags go to the JVM and the rest go to
/// the runner after its fixed flags, followed by `trailing` (usually a test
/// package).
pub fn unittest_command(
    ctx: &GateContext<'_>,
    runner_args: &[String],
    trailing: &[String],
) -> Result<CommandSpec, GateError> {
    let parsed = partition(runner_args, &[], false)?;
    let classpath = ctx.config.tests_classpath().join(PATH_SEPARATOR);
    let flags: Vec<String> = UNITTEST_FLAGS.iter().map(|s| s.to_string()).collect();

    let args = ArgAssembler::new()
        .with_test_prefix(&classpath)
        .with_vm_args(&parsed.vm_args)
        .with_main_class(&ctx.config.unittest.main_class)
        .with_program_args(&flags)
        .with_program_args(&parsed.remainder)
        .with_program_args(trailing)
        .build();
    Ok(ctx.java(args).cwd(ctx.suite_dir()))
}

/// Run the configured unit-test package with extra runner arguments.
pub fn run_unittests(
    ctx: &GateContext<'_>,
    args: &[String],
    policy: ExitPolicy,
) -> Result<i32, GateError> {
    let package = vec![ctx.config.unittest.package.clone()];
    let command = unittest_command(ctx, args, &package)?;
    run_command(ctx.executor, &command, policy)
}
