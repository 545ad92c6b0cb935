//! Report command implementation.
//!
//! The report command:
//! 1. Prints the size utility's section summary
//! 2. Ranks code symbols and groups them by class/namespace
//! 3. Prints the memory configuration from the linker map
//!
//! Missing artifacts and failing tools are reported and skipped; they never
//! abort the run.

use crate::aggregator::analyze_symbol_dump;
use crate::output::{banner, render_class_table, render_symbol_table};
use crate::parser::read_memory_configuration;
use crate::parser::model::{FlashReport, SymbolAnalysis};
use crate::toolchain::{
    size_summary, symbol_dump, Demangler, DisabledDemangler, SystemRunner, ToolDemangler,
    ToolRunner, ToolchainConfig,
};
use crate::utils::config::{
    DEFAULT_BUILD_DIR, DEFAULT_ELF_NAME, DEFAULT_MAP_NAME, DEFAULT_TOP_CLASSES,
    DEFAULT_TOP_SYMBOLS, MAX_TOP_ENTRIES,
};
use anyhow::Result;
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Firmware ELF file
    pub elf: PathBuf,

    /// Linker map file
    pub map: PathBuf,

    /// Toolchain program names
    pub toolchain: ToolchainConfig,

    /// Resolve mangled names through the demangler
    pub demangle: bool,

    /// Rows in the top symbols table
    pub top_symbols: usize,

    /// Rows in the class/namespace table
    pub top_classes: usize,
}

impl Default for ReportArgs {
    fn default() -> Self {
        let build_dir = Path::new(DEFAULT_BUILD_DIR);
        Self {
            elf: build_dir.join(DEFAULT_ELF_NAME),
            map: build_dir.join(DEFAULT_MAP_NAME),
            toolchain: ToolchainConfig::default(),
            demangle: true,
            top_symbols: DEFAULT_TOP_SYMBOLS,
            top_classes: DEFAULT_TOP_CLASSES,
        }
    }
}

/// Execute the report command against the real toolchain, printing to stdout
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Console write failures
/// * JSON report write failures
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let runner = SystemRunner::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_report(&args, &runner, &mut out)?;

    Ok(())
}

/// Run the report with an injected runner and output sink
///
/// **Public** - used by execute_report and by tests with a fake runner
///
/// # Returns
/// The collected report, kept in memory only
pub fn run_report(
    args: &ReportArgs,
    runner: &dyn ToolRunner,
    out: &mut dyn Write,
) -> Result<FlashReport> {
    let start_time = Instant::now();

    let mut report = FlashReport {
        elf_path: args.elf.clone(),
        map_path: args.map.clone(),
        size_summary: None,
        symbols: None,
        memory_configuration: None,
    };

    let elf_found = args.elf.exists();
    let map_found = args.map.exists();

    // Step 1: ELF analysis
    if elf_found {
        info!("Step 1/2: Analyzing ELF file {}", args.elf.display());
        report.size_summary = report_size_summary(args, runner, out)?;
        report.symbols = report_symbols(args, runner, out)?;
    } else {
        warn!("ELF file not found: {}", args.elf.display());
        writeln!(out, "ELF file not found: {}", args.elf.display())?;
    }

    // Step 2: map file
    if map_found {
        info!("Step 2/2: Reading map file {}", args.map.display());
        report.memory_configuration = report_memory_configuration(&args.map, out)?;
    } else {
        warn!("Map file not found: {}", args.map.display());
        writeln!(out, "Map file not found: {}", args.map.display())?;
        if !elf_found {
            writeln!(out)?;
            writeln!(
                out,
                "No build artifacts found. Please build the firmware first (e.g. pio run)."
            )?;
        }
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Print the size utility output
///
/// **Private** - internal helper for run_report
fn report_size_summary(
    args: &ReportArgs,
    runner: &dyn ToolRunner,
    out: &mut dyn Write,
) -> io::Result<Option<String>> {
    writeln!(out, "{}", banner("SIZE ANALYSIS"))?;

    match size_summary(runner, &args.toolchain, &args.elf) {
        Ok(summary) => {
            writeln!(out, "{}", summary)?;
            Ok(Some(summary))
        }
        Err(e) => {
            warn!("Size summary failed: {}", e);
            writeln!(
                out,
                "Could not run {}: {}",
                args.toolchain.size_program(),
                e
            )?;
            Ok(None)
        }
    }
}

/// Print the top symbols and class tables
///
/// **Private** - internal helper for run_report
fn report_symbols(
    args: &ReportArgs,
    runner: &dyn ToolRunner,
    out: &mut dyn Write,
) -> io::Result<Option<SymbolAnalysis>> {
    writeln!(out)?;
    writeln!(out, "{}", banner("TOP FLASH CONSUMERS BY SYMBOL"))?;

    let dump = match symbol_dump(runner, &args.toolchain, &args.elf) {
        Ok(dump) => dump,
        Err(e) => {
            warn!("Symbol dump failed: {}", e);
            writeln!(out, "Could not analyze symbols: {}", e)?;
            return Ok(None);
        }
    };

    let tool_demangler;
    let demangler: &dyn Demangler = if args.demangle {
        tool_demangler = ToolDemangler::new(runner, args.toolchain.demangler.clone());
        &tool_demangler
    } else {
        &DisabledDemangler
    };

    let analysis = analyze_symbol_dump(&dump, demangler, args.top_symbols, args.top_classes);

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        render_symbol_table(&analysis.top_symbols, analysis.total_code_size)
    )?;

    writeln!(out)?;
    writeln!(out, "{}", banner("SIZE BY CLASS/NAMESPACE"))?;
    writeln!(out)?;
    writeln!(out, "{}", render_class_table(&analysis.classes))?;

    Ok(Some(analysis))
}

/// Print the memory configuration block of the map file
///
/// **Private** - internal helper for run_report
fn report_memory_configuration(map: &Path, out: &mut dyn Write) -> io::Result<Option<String>> {
    match read_memory_configuration(map) {
        Ok(Some(block)) => {
            writeln!(out, "{}", banner("MEMORY CONFIGURATION"))?;
            writeln!(out, "{}", block)?;
            writeln!(out)?;
            Ok(Some(block))
        }
        Ok(None) => {
            debug!("Map file has no memory configuration block");
            Ok(None)
        }
        Err(e) => {
            warn!("{}", e);
            writeln!(out, "{}", e)?;
            Ok(None)
        }
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.top_symbols == 0 || args.top_classes == 0 {
        anyhow::bail!("top-symbols and top-classes must be greater than 0");
    }

    if args.top_symbols > MAX_TOP_ENTRIES || args.top_classes > MAX_TOP_ENTRIES {
        anyhow::bail!(
            "top-symbols and top-classes are too large (max {})",
            MAX_TOP_ENTRIES
        );
    }

    if args.toolchain.mcu.trim().is_empty() {
        anyhow::bail!("MCU name cannot be empty");
    }

    if args.demangle && args.toolchain.demangler.trim().is_empty() {
        anyhow::bail!("Demangler program cannot be empty (use --no-demangle to disable)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&ReportArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_top_symbols_zero() {
        let args = ReportArgs {
            top_symbols: 0,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_classes_too_large() {
        let args = ReportArgs {
            top_classes: 2000,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_mcu() {
        let args = ReportArgs {
            toolchain: ToolchainConfig {
                mcu: " ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_demangler_allowed_when_disabled() {
        let mut args = ReportArgs {
            toolchain: ToolchainConfig {
                demangler: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());

        args.demangle = false;
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_default_paths_use_build_dir() {
        let args = ReportArgs::default();

        assert!(args.elf.ends_with("firmware.elf"));
        assert!(args.map.starts_with(DEFAULT_BUILD_DIR));
    }
}
