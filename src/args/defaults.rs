//! Default VM sizing: heap and stack flags appended unless already present.

use crate::args::registry::{HEAP_PREFIX, STACK_PREFIX};
use crate::platform::Arch;

/// Heap and stack sizes appended to a VM argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapDefaults {
    pub min_heap: Option<String>,
    pub max_heap: Option<String>,
    pub stack_size: Option<String>,
}

impl HeapDefaults {
    /// Sizing used for interactive launches: 2g heap, arch-dependent stack.
    pub fn interactive(arch: Arch) -> Self {
        Self {
            min_heap: Some("2g".into()),
            max_heap: Some("2g".into()),
            stack_size: Some(arch.default_stack_size().into()),
        }
    }

    /// Sizing with no flags at all.
    pub fn none() -> Self {
        Self {
            min_heap: None,
            max_heap: None,
            stack_size: None,
        }
    }

    pub fn with_max_heap(mut self, max_heap: impl Into<String>) -> Self {
        self.max_heap = Some(max_heap.into());
        self
    }

    pub fn with_stack_size(mut self, stack_size: impl Into<String>) -> Self {
        self.stack_size = Some(stack_size.into());
        self
    }
}

/// Append heap/stack flags that the caller has not already set.
///
/// Heap flags are skipped as a group when any argument starts with `-Xm`;
/// the stack flag is skipped when any argument starts with `-Xss`.
pub fn append_default_vm_args(mut vm_args: Vec<String>, defaults: &HeapDefaults) -> Vec<String> {
    if !vm_args.iter().any(|a| a.starts_with(HEAP_PREFIX)) {
        if let Some(min_heap) = &defaults.min_heap {
            vm_args.push(format!("-Xms{}", min_heap));
        }
        if let Some(max_heap) = &defaults.max_heap {
            vm_args.push(format!("-Xmx{}", max_heap));
        }
    }
    if let Some(stack_size) = &defaults.stack_size {
        if !vm_args.iter().any(|a| a.starts_with(STACK_PREFIX)) {
            vm_args.push(format!("{}{}", STACK_PREFIX, stack_size));
        }
    }
    vm_args
}
