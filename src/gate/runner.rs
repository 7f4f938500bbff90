use std::time::{Duration, Instant};

use crate::context::GateContext;
use crate::error::GateError;
use crate::gate::tasks::GateTask;

/// Tags a task must carry (any of) to be selected. Empty selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn selects(&self, task: &GateTask) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| task.has_tag(tag))
    }
}

/// Result of a gate run.
#[derive(Debug, Clone, Default)]
pub struct GateReport {
    /// Selected tasks with their wall time (zero for a dry run).
    pub executed: Vec<(String, Duration)>,
    /// Tasks the filter did not select.
    pub skipped: Vec<String>,
}

/// Run every task in `tasks` selected by `filter`, in order.
///
/// The first failing task aborts the gate.
pub fn run_gate(
    ctx: &GateContext<'_>,
    tasks: &[GateTask],
    filter: &TagFilter,
    dry_run: bool,
) -> Result<GateReport, GateError> {
    let mut report = GateReport::default();

    for task in tasks {
        if !filter.selects(task) {
            report.skipped.push(task.name.clone());
            continue;
        }
        if dry_run {
            tracing::info!(task = %task.name, "Selected");
            report.executed.push((task.name.clone(), Duration::ZERO));
            continue;
        }

        tracing::info!(task = %task.name, "Running gate task");
        let started = Instant::now();
        if let Err(err) = task.run(ctx) {
            tracing::error!(task = %task.name, "Gate task failed: {}", err);
            return Err(err);
        }
        let elapsed = started.elapsed();
        tracing::info!(task = %task.name, ?elapsed, "Gate task passed");
        report.executed.push((task.name.clone(), elapsed));
    }
    Ok(report)
}
