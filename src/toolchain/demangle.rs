//! Demangling of compiler-encoded symbol names.

use super::runner::ToolRunner;
use crate::utils::error::ToolError;

/// Capability to turn a mangled symbol name into a readable one
///
/// **Public** - injected into label derivation so it can be faked in tests
pub trait Demangler {
    fn demangle(&self, name: &str) -> Result<String, ToolError>;
}

impl<F> Demangler for F
where
    F: Fn(&str) -> Result<String, ToolError>,
{
    fn demangle(&self, name: &str) -> Result<String, ToolError> {
        self(name)
    }
}

/// Demangles by running an external filter such as `c++filt <name>`
pub struct ToolDemangler<'a> {
    runner: &'a dyn ToolRunner,
    program: String,
}

impl<'a> ToolDemangler<'a> {
    pub fn new(runner: &'a dyn ToolRunner, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }
}

impl Demangler for ToolDemangler<'_> {
    fn demangle(&self, name: &str) -> Result<String, ToolError> {
        let output = self.runner.run(&self.program, &[name.to_string()])?;
        Ok(output.trim().to_string())
    }
}

/// Always fails; used with `--no-demangle`
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledDemangler;

impl Demangler for DisabledDemangler {
    fn demangle(&self, _name: &str) -> Result<String, ToolError> {
        Err(ToolError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoRunner;

    impl ToolRunner for EchoRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<String, ToolError> {
            assert_eq!(program, "c++filt");
            assert_eq!(args.len(), 1);
            Ok(format!("  Clock::tick({})\n", args[0]))
        }
    }

    #[test]
    fn test_tool_demangler_trims_output() {
        let runner = EchoRunner;
        let demangler = ToolDemangler::new(&runner, "c++filt");

        assert_eq!(
            demangler.demangle("_ZN5Clock4tickEv").unwrap(),
            "Clock::tick(_ZN5Clock4tickEv)"
        );
    }

    #[test]
    fn test_disabled_demangler_fails() {
        assert!(DisabledDemangler.demangle("_ZN5Clock4tickEv").is_err());
    }
}
