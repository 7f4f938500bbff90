//! Argument assembler: builds the final Java argument list.

/// Builder for the argument list passed to the Java executable.
///
/// Stages are appended in call order, so callers express the layout
/// `<prefix> <vm args> <main class> <program args>` directly.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    args: Vec<String>,
}

impl ArgAssembler {
    /// Start with an empty arg list.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Assertions on (`-ea -esa`) followed by an explicit classpath.
    pub fn with_test_prefix(mut self, classpath: &str) -> Self {
        self.args.extend(["-ea".into(), "-esa".into(), "-cp".into(), classpath.to_string()]);
        self
    }

    /// Add VM arguments.
    pub fn with_vm_args(mut self, vm_args: &[String]) -> Self {
        self.args.extend_from_slice(vm_args);
        self
    }

    /// Add the entry point class.
    pub fn with_main_class(mut self, main_class: &str) -> Self {
        self.args.push(main_class.to_string());
        self
    }

    /// Add program arguments.
    pub fn with_program_args(mut self, program_args: &[String]) -> Self {
        self.args.extend_from_slice(program_args);
        self
    }

    /// Build the final argument list.
    pub fn build(self) -> Vec<String> {
        self.args
    }
}

impl Default for ArgAssembler {
    fn default() -> Self {
        Self::new()
    }
}
