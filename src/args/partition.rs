//! Argument partitioner: raw args → VM args, classpath, program args.

use crate::args::registry::{is_classpath_flag, is_vm_flag, DOUBLE_DASH};
use crate::error::GateError;

/// Separator used to join classpath entries.
pub const PATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Result of partitioning a raw argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// VM flags in encounter order, led by `-cp <joined>` when a classpath exists.
    pub vm_args: Vec<String>,
    /// Default entries followed by the last explicit classpath value.
    pub classpath: Vec<String>,
    /// Program arguments, passed through untouched.
    pub remainder: Vec<String>,
}

impl ParsedArgs {
    /// The classpath joined with the platform separator, if any.
    pub fn joined_classpath(&self) -> Option<String> {
        if self.classpath.is_empty() {
            None
        } else {
            Some(self.classpath.join(PATH_SEPARATOR))
        }
    }
}

/// Partition `raw_args` into VM flags and program arguments.
///
/// `-cp`/`-classpath` consume the following token; the last one wins. The
/// explicit value is appended to `default_classpath`, and the combined list
/// (if non-empty) becomes a leading `-cp` pair in `vm_args`.
///
/// With `double_dash` enabled, a bare `--` ends the walk and everything from
/// it onwards goes to the remainder verbatim.
pub fn partition(
    raw_args: &[String],
    default_classpath: &[String],
    double_dash: bool,
) -> Result<ParsedArgs, GateError> {
    let mut vm_args = Vec::new();
    let mut remainder = Vec::new();
    let mut explicit_cp: Option<String> = None;
    let mut iter = raw_args.iter().enumerate();

    while let Some((i, arg)) = iter.next() {
        if is_vm_flag(arg) {
            vm_args.push(arg.clone());
        } else if double_dash && arg == DOUBLE_DASH {
            remainder.extend_from_slice(&raw_args[i..]);
            break;
        } else if is_classpath_flag(arg) {
            match iter.next() {
                Some((_, value)) => explicit_cp = Some(value.clone()),
                None => return Err(GateError::Argument { flag: arg.clone() }),
            }
        } else {
            remainder.push(arg.clone());
        }
    }

    let mut classpath = default_classpath.to_vec();
    classpath.extend(explicit_cp);

    let mut parsed = ParsedArgs {
        vm_args: Vec::with_capacity(vm_args.len() + 2),
        classpath,
        remainder,
    };
    if let Some(joined) = parsed.joined_classpath() {
        parsed.vm_args.push("-cp".into());
        parsed.vm_args.push(joined);
    }
    parsed.vm_args.extend(vm_args);
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn joined_classpath_uses_platform_separator() {
        let parsed = partition(&args(&["-cp", "b"]), &args(&["a"]), false).unwrap();
        assert_eq!(
            parsed.joined_classpath(),
            Some(format!("a{}b", PATH_SEPARATOR))
        );
    }

    #[test]
    fn classpath_value_is_not_reclassified() {
        let parsed = partition(&args(&["-cp", "-Dlooks.like.flag"]), &[], false).unwrap();
        assert_eq!(parsed.vm_args, args(&["-cp", "-Dlooks.like.flag"]));
        assert!(parsed.remainder.is_empty());
    }
}
