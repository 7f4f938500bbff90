//! VM flag registry: which launcher tokens belong to the VM.

/// How a rule matches a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Token starts with the pattern (e.g. `-Xmx2g` for `-X`).
    Prefix,
    /// Token equals the pattern.
    Exact,
}

/// A single VM flag rule.
#[derive(Debug, Clone)]
pub struct VmFlagRule {
    pub pattern: &'static str,
    pub kind: MatchKind,
}

impl VmFlagRule {
    const fn prefix(pattern: &'static str) -> Self {
        Self {
            pattern,
            kind: MatchKind::Prefix,
        }
    }

    const fn exact(pattern: &'static str) -> Self {
        Self {
            pattern,
            kind: MatchKind::Exact,
        }
    }

    /// Check if this rule matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        match self.kind {
            MatchKind::Prefix => arg.starts_with(self.pattern),
            MatchKind::Exact => arg == self.pattern,
        }
    }
}

/// Flags that take the next token as the classpath.
pub const CLASSPATH_FLAGS: &[&str] = &["-cp", "-classpath"];

/// Stop token in double-dash mode.
pub const DOUBLE_DASH: &str = "--";

/// Prefix shared by `-Xms`, `-Xmx` and `-Xmn`.
pub const HEAP_PREFIX: &str = "-Xm";

pub const STACK_PREFIX: &str = "-Xss";

static VM_FLAG_RULES: &[VmFlagRule] = &[
    VmFlagRule::prefix("-X"),
    VmFlagRule::prefix("-G:"),
    VmFlagRule::prefix("-D"),
    VmFlagRule::prefix("-verbose"),
    VmFlagRule::prefix("-ea"),
    VmFlagRule::prefix("-javaagent"),
    VmFlagRule::exact("-esa"),
    VmFlagRule::exact("-d64"),
    VmFlagRule::exact("-server"),
];

/// The complete VM flag rule set.
pub fn vm_flag_rules() -> &'static [VmFlagRule] {
    VM_FLAG_RULES
}

/// Whether `arg` is consumed by the VM rather than the program.
pub fn is_vm_flag(arg: &str) -> bool {
    vm_flag_rules().iter().any(|rule| rule.matches(arg))
}

pub fn is_classpath_flag(arg: &str) -> bool {
    CLASSPATH_FLAGS.contains(&arg)
}
