//! Shared test utilities: recording executor, suite fixtures, archive builder.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use jsgate::config::Config;
use jsgate::process::{CommandSpec, ProcessExecutor};
use jsgate::GateError;
use tempfile::TempDir;

pub fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Executor that records every command instead of running it.
///
/// `run` returns queued statuses in order, then 0. `capture` returns the
/// configured stdout with status 0.
#[derive(Default)]
pub struct RecordingExecutor {
    commands: RefCell<Vec<CommandSpec>>,
    statuses: RefCell<VecDeque<i32>>,
    stdout: String,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(statuses: &[i32]) -> Self {
        Self {
            statuses: RefCell::new(statuses.iter().copied().collect()),
            ..Self::default()
        }
    }

    pub fn with_stdout(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.borrow().clone()
    }
}

impl ProcessExecutor for RecordingExecutor {
    fn run(&self, command: &CommandSpec) -> Result<i32, GateError> {
        self.commands.borrow_mut().push(command.clone());
        Ok(self.statuses.borrow_mut().pop_front().unwrap_or(0))
    }

    fn capture(&self, command: &CommandSpec) -> Result<(i32, String), GateError> {
        self.commands.borrow_mut().push(command.clone());
        Ok((0, self.stdout.clone()))
    }
}

/// A throwaway suite root with a config pointing at it.
pub struct Fixture {
    pub dir: TempDir,
    pub config: Config,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = Config::default();
        config.suite.dir = dir.path().to_path_buf();
        config.classpath.launcher = strings(&["launcher.jar", "engine.jar"]);
        config.classpath.tests = strings(&["tests.jar"]);
        Self { dir, config }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Path string of a suite-relative entry, as it appears on a classpath.
    pub fn entry(&self, relative: &str) -> String {
        self.path(relative).to_string_lossy().into_owned()
    }

    /// Write a tar archive under `archives/` and register it as `name`.
    pub fn add_archive(&mut self, name: &str, entries: &[(&str, &str)]) -> PathBuf {
        let relative = PathBuf::from("archives").join(format!("{}.tar", name.to_lowercase()));
        let path = self.dir.path().join(&relative);
        write_tar(&path, entries);
        self.config.artifacts.insert(name.to_string(), relative);
        path
    }
}

/// Write an uncompressed tar archive with the given file entries.
pub fn write_tar(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(path).unwrap();
    let mut builder = tar::Builder::new(file);
    for (name, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, name, content.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap();
}

/// Set a regular file's modification time.
pub fn set_mtime(path: &Path, time: SystemTime) {
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(time).unwrap();
}

pub fn hours_ago(hours: u64) -> SystemTime {
    SystemTime::now() - Duration::from_secs(hours * 3600)
}

pub fn hours_ahead(hours: u64) -> SystemTime {
    SystemTime::now() + Duration::from_secs(hours * 3600)
}
