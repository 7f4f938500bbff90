//! Interactive launches: the JS shell and the legacy shell.

use crate::args::{append_default_vm_args, partition, ArgAssembler, HeapDefaults};
use crate::context::GateContext;
use crate::error::GateError;
use crate::process::{run_command, CommandSpec, ExitPolicy};

/// Property appended to every `run-script` invocation.
pub const BIND_PROGRAM_RESULT: &str = "-Dtruffle.js.BindProgramResult=false";

/// Which shell to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// The engine's own launcher, on the configured launcher classpath.
    Js,
    /// The legacy shell, with no default classpath.
    Legacy,
}

/// Build a shell command line: `<vm args> <main class> <program args>`.
pub fn js_cmd_line(
    raw_args: &[String],
    main_class: &str,
    default_classpath: &[String],
    append_default_args: bool,
    ctx: &GateContext<'_>,
) -> Result<Vec<String>, GateError> {
    let parsed = partition(raw_args, default_classpath, false)?;
    let vm_args = if append_default_args {
        append_default_vm_args(parsed.vm_args, &HeapDefaults::interactive(ctx.arch))
    } else {
        parsed.vm_args
    };
    Ok(ArgAssembler::new()
        .with_vm_args(&vm_args)
        .with_main_class(main_class)
        .with_program_args(&parsed.remainder)
        .build())
}

/// Java invocation for `shell` with the user's arguments.
pub fn shell_command(
    ctx: &GateContext<'_>,
    shell: Shell,
    raw_args: &[String],
    append_default_args: bool,
) -> Result<CommandSpec, GateError> {
    let args = match shell {
        Shell::Js => {
            let mut raw = raw_args.to_vec();
            raw.push(BIND_PROGRAM_RESULT.to_string());
            js_cmd_line(
                &raw,
                &ctx.config.launcher.main_class,
                &ctx.config.launcher_classpath(),
                append_default_args,
                ctx,
            )?
        }
        Shell::Legacy => js_cmd_line(
            raw_args,
            &ctx.config.launcher.legacy_main_class,
            &[],
            append_default_args,
            ctx,
        )?,
    };
    Ok(ctx.java(args))
}

/// Run the REPL or a JavaScript program.
pub fn run_shell(
    ctx: &GateContext<'_>,
    shell: Shell,
    raw_args: &[String],
    policy: ExitPolicy,
) -> Result<i32, GateError> {
    let command = shell_command(ctx, shell, raw_args, true)?;
    run_command(ctx.executor, &command, policy)
}
