//! Data model of one flash report run.
//!
//! Everything here lives only for the duration of a run; nothing is
//! written to disk.

use std::path::PathBuf;

/// Everything a report run collected
#[derive(Debug, Clone, PartialEq)]
pub struct FlashReport {
    /// ELF file that was analyzed
    pub elf_path: PathBuf,

    /// Linker map file that was read
    pub map_path: PathBuf,

    /// Raw output of the size utility
    pub size_summary: Option<String>,

    /// Symbol ranking and class breakdown
    pub symbols: Option<SymbolAnalysis>,

    /// Memory region table from the map file
    pub memory_configuration: Option<String>,
}

/// Result of aggregating the code symbols of one ELF file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolAnalysis {
    /// Sum of all code symbol sizes in bytes
    pub total_code_size: u64,

    /// Number of code symbols
    pub code_symbol_count: usize,

    /// Largest code symbols (ranked by size)
    pub top_symbols: Vec<RankedSymbol>,

    /// Code size grouped by class/namespace (ranked by total)
    pub classes: Vec<ClassBucket>,

    /// Code bytes that could not be attributed to any class
    pub unattributed_size: u64,
}

/// One row of the top symbols table
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSymbol {
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// Percentage of total code size
    pub percentage: f64,
}

/// Code size attributed to one class or namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBucket {
    pub label: String,
    pub total_size: u64,
}

impl ClassBucket {
    pub fn new(label: impl Into<String>, total_size: u64) -> Self {
        Self {
            label: label.into(),
            total_size,
        }
    }
}
