//! Gate: the task matrix CI runs before merging.

mod runner;
mod tasks;

pub use runner::{run_gate, GateReport, TagFilter};
pub use tasks::{
    gate_tasks, GateAction, GateTask, GateVariant, TestCommand, GATE_VARIANTS, TAG_ALL,
    TAG_DEFAULT,
};
