//! Smoke tests: run a built JS binary over every script in `test/smoketest`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::context::GateContext;
use crate::error::GateError;
use crate::process::{run_command, CommandSpec, ExitPolicy};

/// Smoke-test directory, relative to the suite root.
pub const SMOKETEST_DIR: &str = "test/smoketest";

/// Every `.js` file below `dir`, sorted.
pub fn discover_smoketests(dir: &Path) -> Result<Vec<PathBuf>, GateError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            GateError::io("Failed to walk smoketest directory", path, e.into())
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().map_or(false, |ext| ext == "js") {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Run `js_binary --js.intl-402 <files...>`; fails before launching if none are found.
pub fn run_smoketests(ctx: &GateContext<'_>, js_binary: &Path) -> Result<i32, GateError> {
    let dir = ctx.config.suite_path(SMOKETEST_DIR);
    if !dir.is_dir() {
        return Err(GateError::SuiteNotFound { dir });
    }
    let files = discover_smoketests(&dir)?;
    if files.is_empty() {
        return Err(GateError::SuiteNotFound { dir });
    }

    let command = CommandSpec::new(js_binary.to_string_lossy())
        .args(["--js.intl-402"])
        .args(files.iter().map(|f| f.to_string_lossy().into_owned()));
    run_command(ctx.executor, &command, ExitPolicy::NonZeroIsFatal)
}
