use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use jsgate::config::Config;
use jsgate::deploy::deploy_if_primary_branch;
use jsgate::gate::{gate_tasks, run_gate, TagFilter};
use jsgate::launcher::{run_shell, Shell};
use jsgate::process::{ExitPolicy, SystemExecutor};
use jsgate::resolver::ConfigResolver;
use jsgate::smoketest::run_smoketests;
use jsgate::suite::{run_test_suite, TestSuite};
use jsgate::unittest::run_unittests;
use jsgate::{logging, GateContext, GateError};

#[derive(Parser, Debug)]
#[command(name = "jsgate", version, about = "Launch, test and gate the JavaScript runtime")]
struct Cli {
    /// Config file (default: ./jsgate.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    // Long form only: `-verbose` is a forwarded VM flag.
    /// Verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Arguments forwarded verbatim to the operation.
#[derive(Args, Debug)]
struct Forwarded {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the REPL or a JavaScript program [JS args|VM options]
    #[command(name = "run-script", visible_alias = "js")]
    RunScript(Forwarded),
    /// Run the REPL or a JavaScript program with the legacy shell
    #[command(name = "run-legacy-script", visible_alias = "nashorn")]
    RunLegacyScript(Forwarded),
    /// Run the test262 conformance suite
    #[command(name = "run-conformance-suite-262", visible_alias = "test262")]
    RunConformanceSuite262(Forwarded),
    /// Run the Nashorn conformance suite
    #[command(name = "run-conformance-suite-nashorn", visible_alias = "testnashorn")]
    RunConformanceSuiteNashorn(Forwarded),
    /// Run the V8 conformance suite
    #[command(name = "run-conformance-suite-v8", visible_alias = "testv8")]
    RunConformanceSuiteV8(Forwarded),
    /// Run the unit tests
    #[command(name = "run-unit-tests", visible_alias = "unittest")]
    RunUnitTests(Forwarded),
    /// Deploy binaries if the active branch is the primary branch
    #[command(name = "deploy-if-on-primary-branch", visible_alias = "deploy-binary-if-master")]
    DeployIfOnPrimaryBranch(Forwarded),
    /// Run a JS binary over the smoke tests
    #[command(name = "run-smoketest")]
    RunSmoketest {
        /// JS launcher binary to test
        js_binary: PathBuf,
    },
    /// Run the gate task matrix
    Gate {
        /// Only run tasks carrying one of these tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
        /// List selected tasks without running them
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the language component metadata as JSON
    Component,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli) {
        Ok(status) => std::process::exit(status),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let status = match err.downcast_ref::<GateError>() {
                Some(GateError::SubprocessFailure { status, .. }) if *status != 0 => *status,
                _ => 1,
            };
            std::process::exit(status);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if let Command::Component = cli.command {
        let json = jsgate::component::graaljs_component()
            .to_json()
            .context("failed to serialize component metadata")?;
        println!("{}", json);
        return Ok(0);
    }

    let config = Config::discover(cli.config.as_deref()).context("failed to load config")?;
    let executor = SystemExecutor;
    let resolver = ConfigResolver::new(&config);
    let ctx = GateContext::new(&config, &executor, &resolver);
    let fatal = ExitPolicy::NonZeroIsFatal;

    let status = match cli.command {
        Command::RunScript(f) => run_shell(&ctx, Shell::Js, &f.args, fatal)?,
        Command::RunLegacyScript(f) => run_shell(&ctx, Shell::Legacy, &f.args, fatal)?,
        Command::RunConformanceSuite262(f) => run_test_suite(&ctx, TestSuite::Test262, &f.args, fatal)?,
        Command::RunConformanceSuiteNashorn(f) => {
            run_test_suite(&ctx, TestSuite::TestNashorn, &f.args, fatal)?
        }
        Command::RunConformanceSuiteV8(f) => run_test_suite(&ctx, TestSuite::TestV8, &f.args, fatal)?,
        Command::RunUnitTests(f) => run_unittests(&ctx, &f.args, fatal)?,
        Command::DeployIfOnPrimaryBranch(f) => deploy_if_primary_branch(&ctx, &f.args)?.status(),
        Command::RunSmoketest { js_binary } => run_smoketests(&ctx, &js_binary)?,
        Command::Gate { tags, dry_run } => {
            let filter = TagFilter::from_tags(tags);
            let report = run_gate(&ctx, &gate_tasks(), &filter, dry_run)?;
            for (name, elapsed) in &report.executed {
                println!("{:<32} {:.2?}", name, elapsed);
            }
            0
        }
        Command::Component => 0,
    };
    Ok(status)
}
