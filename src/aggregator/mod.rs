//! Aggregation of symbol records into size rankings.
//!
//! This module transforms parsed symbol dumps into:
//! - Top code symbols by size (with share of total)
//! - Code size per class/namespace

pub mod analysis;
pub mod buckets;
pub mod ranking;

// Re-export main types and functions
pub use analysis::{analyze_symbol_dump, analyze_symbols};
pub use buckets::{build_class_buckets, derive_label};
pub use ranking::{percentage_of, rank_symbols, total_code_size};
