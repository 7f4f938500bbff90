use crate::args::{append_default_vm_args, partition, ArgAssembler, HeapDefaults, PATH_SEPARATOR};
use crate::context::GateContext;
use crate::error::GateError;
use crate::process::{run_command, CommandSpec, ExitPolicy};
use crate::suite::fetch::fetch_test_suite;
use crate::suite::profile::{SuiteProfile, TestSuite, WorkDir};

/// Fetch and run one of the known conformance suites.
pub fn run_test_suite(
    ctx: &GateContext<'_>,
    suite: TestSuite,
    custom_args: &[String],
    policy: ExitPolicy,
) -> Result<i32, GateError> {
    let profile = suite.profile(ctx.arch);
    run_suite_profile(ctx, &profile, custom_args, policy)
}

/// Fetch the suite described by `profile`, then launch its runner.
pub fn run_suite_profile(
    ctx: &GateContext<'_>,
    profile: &SuiteProfile,
    custom_args: &[String],
    policy: ExitPolicy,
) -> Result<i32, GateError> {
    let dest = ctx.config.suite_path(&profile.destination);
    let outcome = fetch_test_suite(&dest, &profile.artifacts, ctx.resolver)?;
    tracing::debug!(suite = profile.name, ?outcome, "Suite fetched");

    let command = build_suite_command(ctx, profile, custom_args)?;
    run_command(ctx.executor, &command, policy)
}

/// Assemble the runner invocation for `profile`.
///
/// Layout: `-ea -esa -cp <tests> <suite defaults> <custom vm args> <main> <program args>`.
/// Custom VM args get the suite's max heap and stack size unless they set
/// their own; the min heap keeps its interactive default.
pub fn build_suite_command(
    ctx: &GateContext<'_>,
    profile: &SuiteProfile,
    custom_args: &[String],
) -> Result<CommandSpec, GateError> {
    let parsed = partition(custom_args, &[], false)?;
    let sizing = HeapDefaults::interactive(ctx.arch)
        .with_max_heap(profile.max_heap.clone())
        .with_stack_size(profile.stack_size.clone());
    let vm_args = append_default_vm_args(parsed.vm_args, &sizing);

    let classpath = ctx.config.tests_classpath().join(PATH_SEPARATOR);
    let args = ArgAssembler::new()
        .with_test_prefix(&classpath)
        .with_vm_args(&profile.default_vm_args)
        .with_vm_args(&vm_args)
        .with_main_class(&profile.main_class)
        .with_program_args(&parsed.remainder)
        .build();

    let cwd = match profile.work_dir {
        WorkDir::SuiteRoot => ctx.suite_dir(),
        WorkDir::Destination => ctx.config.suite_path(&profile.destination),
    };
    Ok(ctx.java(args).cwd(cwd))
}
