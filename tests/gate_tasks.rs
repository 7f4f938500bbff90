//! Tests for the gate task matrix and tag filtering.

mod common;

use common::{strings, Fixture, RecordingExecutor};
use jsgate::gate::{gate_tasks, run_gate, GateAction, TagFilter, TestCommand, GATE_VARIANTS};
use jsgate::resolver::ConfigResolver;
use jsgate::{GateContext, GateError};

fn selected(filter: &TagFilter) -> Vec<String> {
    gate_tasks()
        .into_iter()
        .filter(|t| filter.selects(t))
        .map(|t| t.name)
        .collect()
}

#[test]
fn matrix_covers_every_command_and_variant() {
    let tasks = gate_tasks();
    assert_eq!(tasks.len(), 2 + TestCommand::ALL.len() * GATE_VARIANTS.len());
    assert_eq!(tasks[0].name, "TestJSCommand");
    assert_eq!(tasks[1].name, "UnitTests");
    assert_eq!(tasks[2].name, "Test262-default");
    assert_eq!(tasks.last().unwrap().name, "TestUnittest-shareengine");
}

#[test]
fn variant_tasks_carry_name_variant_and_all_tags() {
    let task = gate_tasks()
        .into_iter()
        .find(|t| t.name == "TestV8-noic")
        .unwrap();
    assert_eq!(task.tags, strings(&["TestV8-noic", "noic", "all"]));
    assert_eq!(
        task.action,
        GateAction::Test {
            command: TestCommand::TestV8,
            args: strings(&[
                "-Dtruffle.js.PropertyCacheLimit=0",
                "-Dtruffle.js.FunctionCacheLimit=0",
                "gate",
            ]),
        }
    );
}

#[test]
fn default_tag_selects_the_default_set() {
    assert_eq!(
        selected(&TagFilter::from_tags(["default"])),
        strings(&[
            "TestJSCommand",
            "UnitTests",
            "Test262-default",
            "TestNashorn-default",
            "TestV8-default",
            "TestUnittest-default",
        ])
    );
}

#[test]
fn single_task_tag_selects_one_task() {
    assert_eq!(
        selected(&TagFilter::from_tags(["Test262-shareengine"])),
        strings(&["Test262-shareengine"])
    );
}

#[test]
fn empty_filter_selects_everything() {
    assert_eq!(selected(&TagFilter::all()).len(), gate_tasks().len());
}

#[test]
fn dry_run_launches_nothing() {
    let fx = Fixture::new();
    let exec = RecordingExecutor::new();
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let report = run_gate(&ctx, &gate_tasks(), &TagFilter::from_tags(["noic"]), true).unwrap();

    assert_eq!(report.executed.len(), 4);
    assert_eq!(report.skipped.len(), gate_tasks().len() - 4);
    assert!(exec.commands().is_empty());
}

/// Fixture with every suite archive registered, so the default set can run.
fn suite_fixture() -> Fixture {
    let mut fx = Fixture::new();
    for name in ["TEST262", "TESTNASHORN", "TESTNASHORN_EXTERNAL", "TESTV8"] {
        fx.add_archive(name, &[("a.js", "1")]);
    }
    fx
}

#[test]
fn first_failure_aborts_the_gate() {
    let fx = Fixture::new();
    let exec = RecordingExecutor::with_statuses(&[0, 7]);
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let err = run_gate(&ctx, &gate_tasks(), &TagFilter::from_tags(["default"]), false).unwrap_err();

    assert!(matches!(err, GateError::SubprocessFailure { status: 7, .. }));
    // TestJSCommand passed, UnitTests failed, Test262-default never started.
    assert_eq!(exec.commands().len(), 2);
    assert!(!fx.path("lib/test262").exists());
}

#[test]
fn selected_tasks_run_in_order() {
    let fx = suite_fixture();
    let exec = RecordingExecutor::new();
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let report = run_gate(&ctx, &gate_tasks(), &TagFilter::from_tags(["default"]), false).unwrap();

    let names: Vec<&str> = report.executed.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "TestJSCommand",
            "UnitTests",
            "Test262-default",
            "TestNashorn-default",
            "TestV8-default",
            "TestUnittest-default",
        ]
    );
    assert_eq!(report.skipped.len(), gate_tasks().len() - 6);

    let commands = exec.commands();
    assert_eq!(commands.len(), 6);
    assert!(commands[0]
        .args
        .contains(&"-Dtruffle.js.ProfileTime=true".to_string()));
    assert_eq!(
        commands[1].args.last().map(String::as_str),
        Some("com.oracle.truffle.js.scriptengine.test")
    );
    assert!(commands[2]
        .args
        .contains(&"-Dpolyglot.js.test262-mode=true".to_string()));
    assert_eq!(commands[3].cwd, Some(fx.path("lib/testnashorn")));
}
