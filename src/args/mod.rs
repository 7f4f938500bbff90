//! Argument handling for launcher command lines.
//!
//! ```text
//! Raw args → Partition → Augment defaults → Assemble → Java argument list
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod assembler;
mod defaults;
mod partition;
mod registry;

pub use assembler::ArgAssembler;
pub use defaults::{append_default_vm_args, HeapDefaults};
pub use partition::{partition, ParsedArgs, PATH_SEPARATOR};
pub use registry::{
    is_classpath_flag, is_vm_flag, vm_flag_rules, MatchKind, VmFlagRule, CLASSPATH_FLAGS,
    HEAP_PREFIX, STACK_PREFIX,
};
