//! The gate task matrix.

use crate::context::GateContext;
use crate::error::GateError;
use crate::launcher::{run_shell, Shell};
use crate::process::{run_command, ExitPolicy};
use crate::suite::{run_test_suite, TestSuite};
use crate::unittest::{run_unittests, unittest_command};

pub const TAG_DEFAULT: &str = "default";
pub const TAG_ALL: &str = "all";

/// Test commands that run once per gate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCommand {
    Test262,
    TestNashorn,
    TestV8,
    TestUnittest,
}

impl TestCommand {
    pub const ALL: [TestCommand; 4] = [
        TestCommand::Test262,
        TestCommand::TestNashorn,
        TestCommand::TestV8,
        TestCommand::TestUnittest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TestCommand::Test262 => "Test262",
            TestCommand::TestNashorn => "TestNashorn",
            TestCommand::TestV8 => "TestV8",
            TestCommand::TestUnittest => "TestUnittest",
        }
    }

    pub fn run(
        self,
        ctx: &GateContext<'_>,
        args: &[String],
        policy: ExitPolicy,
    ) -> Result<i32, GateError> {
        match self {
            TestCommand::Test262 => run_test_suite(ctx, TestSuite::Test262, args, policy),
            TestCommand::TestNashorn => run_test_suite(ctx, TestSuite::TestNashorn, args, policy),
            TestCommand::TestV8 => run_test_suite(ctx, TestSuite::TestV8, args, policy),
            TestCommand::TestUnittest => run_unittests(ctx, args, policy),
        }
    }
}

/// A named set of extra arguments passed to every test command.
#[derive(Debug, Clone, Copy)]
pub struct GateVariant {
    pub name: &'static str,
    pub args: &'static [&'static str],
}

pub const GATE_VARIANTS: &[GateVariant] = &[
    GateVariant {
        name: TAG_DEFAULT,
        args: &["gate"],
    },
    GateVariant {
        name: "noic",
        args: &[
            "-Dtruffle.js.PropertyCacheLimit=0",
            "-Dtruffle.js.FunctionCacheLimit=0",
            "gate",
        ],
    },
    GateVariant {
        name: "directbytebuffer",
        args: &["-Dtruffle.js.DirectByteBuffer=true", "gate"],
    },
    GateVariant {
        name: "cloneuninitialized",
        args: &["-Dtruffle.js.TestCloneUninitialized=true", "gate"],
    },
    GateVariant {
        name: "lazytranslation",
        args: &["-Dtruffle.js.LazyTranslation=true", "gate"],
    },
    GateVariant {
        name: "shareengine",
        args: &["gate", "shareengine"],
    },
];

/// What a gate task does when selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    /// Launch the JS shell with these arguments.
    Script(Vec<String>),
    /// Run the script-engine unit tests.
    ScriptEngineUnitTests,
    /// Run a test command with a variant's arguments.
    Test {
        command: TestCommand,
        args: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateTask {
    pub name: String,
    pub tags: Vec<String>,
    pub action: GateAction,
}

impl GateTask {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Execute the task; any non-zero exit is fatal.
    pub fn run(&self, ctx: &GateContext<'_>) -> Result<i32, GateError> {
        let policy = ExitPolicy::NonZeroIsFatal;
        match &self.action {
            GateAction::Script(args) => run_shell(ctx, Shell::Js, args, policy),
            GateAction::ScriptEngineUnitTests => {
                let package = vec![ctx.config.unittest.scriptengine_package.clone()];
                let command = unittest_command(ctx, &[], &package)?;
                run_command(ctx.executor, &command, policy)
            }
            GateAction::Test { command, args } => command.run(ctx, args, policy),
        }
    }
}

/// All gate tasks, in execution order.
pub fn gate_tasks() -> Vec<GateTask> {
    let mut tasks = vec![
        GateTask {
            name: "TestJSCommand".into(),
            tags: vec![TAG_DEFAULT.into(), TAG_ALL.into()],
            action: GateAction::Script(vec![
                "-Dtruffle.js.ProfileTime=true".into(),
                "-e".into(),
                "\"\"".into(),
            ]),
        },
        GateTask {
            name: "UnitTests".into(),
            tags: vec![TAG_DEFAULT.into(), TAG_ALL.into()],
            action: GateAction::ScriptEngineUnitTests,
        },
    ];

    for command in TestCommand::ALL {
        for variant in GATE_VARIANTS {
            let name = format!("{}-{}", command.name(), variant.name);
            tasks.push(GateTask {
                tags: vec![name.clone(), variant.name.into(), TAG_ALL.into()],
                name,
                action: GateAction::Test {
                    command,
                    args: variant.args.iter().map(|s| s.to_string()).collect(),
                },
            });
        }
    }
    tasks
}
