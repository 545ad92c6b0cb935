//! Invocations of the binutils size and nm utilities.
//!
//! `size -C --mcu` is only understood by the AVR-patched `avr-size`.

use super::runner::ToolRunner;
use crate::utils::config::{DEFAULT_DEMANGLER, DEFAULT_MCU, DEFAULT_TOOL_PREFIX};
use crate::utils::error::ToolError;
use log::{debug, warn};
use std::path::Path;

/// Names of the external utilities for one target toolchain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Cross-toolchain prefix, e.g. `avr-` or `arm-none-eabi-`
    pub prefix: String,

    /// Target MCU passed to `size --mcu`
    pub mcu: String,

    /// Demangler program
    pub demangler: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TOOL_PREFIX.to_string(),
            mcu: DEFAULT_MCU.to_string(),
            demangler: DEFAULT_DEMANGLER.to_string(),
        }
    }
}

impl ToolchainConfig {
    pub fn size_program(&self) -> String {
        format!("{}size", self.prefix)
    }

    pub fn nm_program(&self) -> String {
        format!("{}nm", self.prefix)
    }
}

/// Get the per-section size summary of an ELF file
///
/// **Public** - first section of the report
///
/// Tries `size -C --mcu=<mcu>` (AVR memory-usage format) first and falls
/// back to the plain `size -A` section listing when that fails.
///
/// # Errors
/// The fallback's error when both invocations fail
pub fn size_summary(
    runner: &dyn ToolRunner,
    config: &ToolchainConfig,
    elf: &Path,
) -> Result<String, ToolError> {
    let program = config.size_program();
    let elf_arg = elf.display().to_string();

    let avr_args = vec![
        "-C".to_string(),
        format!("--mcu={}", config.mcu),
        elf_arg.clone(),
    ];

    match runner.run(&program, &avr_args) {
        Ok(output) => Ok(output),
        Err(e) => {
            warn!("{} -C failed ({}), retrying with -A", program, e);
            runner.run(&program, &["-A".to_string(), elf_arg])
        }
    }
}

/// Dump all sized symbols of an ELF file, sorted by size, decimal radix
///
/// **Public** - input of the symbol aggregator
pub fn symbol_dump(
    runner: &dyn ToolRunner,
    config: &ToolchainConfig,
    elf: &Path,
) -> Result<String, ToolError> {
    let program = config.nm_program();
    let args = vec![
        "--print-size".to_string(),
        "--size-sort".to_string(),
        "--radix=d".to_string(),
        elf.display().to_string(),
    ];

    let output = runner.run(&program, &args)?;
    debug!("{} produced {} lines", program, output.lines().count());

    Ok(output)
}
