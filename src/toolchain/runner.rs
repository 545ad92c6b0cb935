//! Subprocess runner used for every external utility call.

use crate::utils::error::ToolError;
use log::debug;
use std::io::ErrorKind;
use std::process::Command;

/// Capability to run an external program and collect its standard output
///
/// **Public** - implemented by `SystemRunner` and by fakes in tests
pub trait ToolRunner {
    /// Run `program` with `args`, blocking until it exits
    ///
    /// # Returns
    /// Captured stdout (lossily decoded) when the program exits with status 0
    ///
    /// # Errors
    /// * `ToolError::NotFound` - program is not on `PATH`
    /// * `ToolError::Failed` - program exited non-zero
    /// * `ToolError::Io` - any other spawn or pipe failure
    fn run(&self, program: &str, args: &[String]) -> Result<String, ToolError>;
}

/// Runs real processes through `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, ToolError> {
        debug!("Running: {} {}", program, args.join(" "));

        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ToolError::NotFound {
                    program: program.to_string(),
                }
            } else {
                ToolError::Io {
                    program: program.to_string(),
                    source: e,
                }
            }
        })?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
