//! Tests for branch-gated deployment and smoke-test discovery.

mod common;

use std::fs;
use std::path::Path;

use common::{strings, Fixture, RecordingExecutor};
use jsgate::deploy::{deploy_if_primary_branch, DeployOutcome};
use jsgate::resolver::ConfigResolver;
use jsgate::smoketest::{discover_smoketests, run_smoketests};
use jsgate::{GateContext, GateError};

// -- deploy -------------------------------------------------------------------

#[test]
fn deploy_on_other_branch_is_a_successful_no_op() {
    let fx = Fixture::new();
    let exec = RecordingExecutor::with_stdout("feature/faster-regex\n");
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let outcome = deploy_if_primary_branch(&ctx, &strings(&["--all"])).unwrap();

    assert_eq!(
        outcome,
        DeployOutcome::Skipped {
            active: "feature/faster-regex".into(),
            primary: "master".into(),
        }
    );
    assert_eq!(outcome.status(), 0);
    let commands = exec.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].program, "git");
}

#[test]
fn deploy_on_primary_branch_runs_deploy_command() {
    let fx = Fixture::new();
    let exec = RecordingExecutor::with_stdout("master\n");
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let outcome = deploy_if_primary_branch(&ctx, &strings(&["--all"])).unwrap();

    assert_eq!(outcome, DeployOutcome::Deployed(0));
    let commands = exec.commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[1].program, "mx");
    assert_eq!(commands[1].args, strings(&["deploy-binary", "--all"]));
}

#[test]
fn primary_branch_is_configurable() {
    let mut fx = Fixture::new();
    fx.config.suite.primary_branch = "main".into();
    let exec = RecordingExecutor::with_stdout("master");
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let outcome = deploy_if_primary_branch(&ctx, &[]).unwrap();
    assert!(matches!(outcome, DeployOutcome::Skipped { .. }));
}

#[test]
fn empty_deploy_command_is_a_config_error() {
    let mut fx = Fixture::new();
    fx.config.deploy.command.clear();
    let exec = RecordingExecutor::with_stdout("master\n");
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let err = deploy_if_primary_branch(&ctx, &[]).unwrap_err();

    assert!(matches!(err, GateError::Config(_)));
    // Only the branch query ran.
    assert_eq!(exec.commands().len(), 1);
}

// -- smoketest ----------------------------------------------------------------

#[test]
fn smoketests_without_directory_fail_before_launch() {
    let fx = Fixture::new();
    let exec = RecordingExecutor::new();
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let err = run_smoketests(&ctx, Path::new("/opt/js/bin/js")).unwrap_err();
    assert!(matches!(err, GateError::SuiteNotFound { .. }));
    assert!(exec.commands().is_empty());
}

#[test]
fn smoketests_without_scripts_fail_before_launch() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.path("test/smoketest")).unwrap();
    fs::write(fx.path("test/smoketest/README.md"), "nothing here").unwrap();
    let exec = RecordingExecutor::new();
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    let err = run_smoketests(&ctx, Path::new("js")).unwrap_err();
    assert!(matches!(err, GateError::SuiteNotFound { .. }));
    assert!(exec.commands().is_empty());
}

#[test]
fn smoketests_are_discovered_recursively_and_sorted() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.path("test/smoketest/nested")).unwrap();
    fs::write(fx.path("test/smoketest/b.js"), "").unwrap();
    fs::write(fx.path("test/smoketest/a.js"), "").unwrap();
    fs::write(fx.path("test/smoketest/nested/c.js"), "").unwrap();
    fs::write(fx.path("test/smoketest/notes.txt"), "").unwrap();

    let files = discover_smoketests(&fx.path("test/smoketest")).unwrap();
    assert_eq!(
        files,
        vec![
            fx.path("test/smoketest/a.js"),
            fx.path("test/smoketest/b.js"),
            fx.path("test/smoketest/nested/c.js"),
        ]
    );
}

#[test]
fn smoketests_run_binary_over_every_script() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.path("test/smoketest")).unwrap();
    fs::write(fx.path("test/smoketest/a.js"), "").unwrap();
    let exec = RecordingExecutor::new();
    let resolver = ConfigResolver::new(&fx.config);
    let ctx = GateContext::new(&fx.config, &exec, &resolver);

    run_smoketests(&ctx, Path::new("/opt/js/bin/js")).unwrap();

    let cmd = &exec.commands()[0];
    assert_eq!(cmd.program, "/opt/js/bin/js");
    assert_eq!(
        cmd.args,
        vec!["--js.intl-402".to_string(), fx.entry("test/smoketest/a.js")]
    );
}
