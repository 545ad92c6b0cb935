//! Console output for flash reports.
//!
//! Section banners and the symbol/class tables.

pub mod table;

// Re-export main functions
pub use table::{banner, render_class_table, render_symbol_table};
