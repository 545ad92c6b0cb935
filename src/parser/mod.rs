//! Tool output parsing and the report data model.
//!
//! This module handles:
//! - Parsing symbol dumps into records
//! - Extracting the memory configuration from linker map files
//! - Defining the report data model

pub mod map_file;
pub mod model;
pub mod symbols;

// Re-export main types
pub use map_file::{extract_memory_configuration, read_memory_configuration};
pub use model::{ClassBucket, FlashReport, RankedSymbol, SymbolAnalysis};
pub use symbols::{parse_symbol_dump, parse_symbol_line, SymbolKind, SymbolRecord};
