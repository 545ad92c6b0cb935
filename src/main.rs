//! Flash Report CLI
//!
//! Summarizes flash usage of a firmware build from its ELF and map files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use flash_report::commands::{display_version, execute_report, validate_args, ReportArgs};
use flash_report::toolchain::ToolchainConfig;
use flash_report::utils::config::{
    DEFAULT_BUILD_DIR, DEFAULT_DEMANGLER, DEFAULT_ELF_NAME, DEFAULT_MAP_NAME, DEFAULT_MCU,
    DEFAULT_TOOL_PREFIX, DEFAULT_TOP_CLASSES, DEFAULT_TOP_SYMBOLS,
};

/// Flash Report - flash memory usage for embedded firmware
#[derive(Parser, Debug)]
#[command(name = "flash-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Report flash usage of a firmware build
    Report {
        /// Build directory containing firmware.elf and firmware.map
        #[arg(short, long, env = "FLASH_REPORT_BUILD_DIR", default_value = DEFAULT_BUILD_DIR)]
        build_dir: PathBuf,

        /// ELF file (overrides <build-dir>/firmware.elf)
        #[arg(short, long)]
        elf: Option<PathBuf>,

        /// Linker map file (overrides <build-dir>/firmware.map)
        #[arg(short, long)]
        map: Option<PathBuf>,

        /// Toolchain prefix for size and nm
        #[arg(long, env = "FLASH_REPORT_PREFIX", default_value = DEFAULT_TOOL_PREFIX)]
        prefix: String,

        /// Target MCU passed to `size --mcu`
        #[arg(long, env = "FLASH_REPORT_MCU", default_value = DEFAULT_MCU)]
        mcu: String,

        /// Demangler program for mangled C++ names
        #[arg(long, default_value = DEFAULT_DEMANGLER)]
        demangler: String,

        /// Do not call the demangler
        #[arg(long)]
        no_demangle: bool,

        /// Number of largest symbols to list
        #[arg(long, default_value_t = DEFAULT_TOP_SYMBOLS)]
        top_symbols: usize,

        /// Number of largest classes/namespaces to list
        #[arg(long, default_value_t = DEFAULT_TOP_CLASSES)]
        top_classes: usize,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            build_dir,
            elf,
            map,
            prefix,
            mcu,
            demangler,
            no_demangle,
            top_symbols,
            top_classes,
        } => {
            let args = ReportArgs {
                elf: elf.unwrap_or_else(|| build_dir.join(DEFAULT_ELF_NAME)),
                map: map.unwrap_or_else(|| build_dir.join(DEFAULT_MAP_NAME)),
                toolchain: ToolchainConfig {
                    prefix,
                    mcu,
                    demangler,
                },
                demangle: !no_demangle,
                top_symbols,
                top_classes,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
