//! External toolchain utilities.
//!
//! This module handles:
//! - Running subprocesses behind the `ToolRunner` capability
//! - Naming the binutils programs for a target toolchain
//! - Size summaries (with fallback) and symbol dumps
//! - Demangling mangled C++ names

pub mod binutils;
pub mod demangle;
pub mod runner;

// Re-export main types
pub use binutils::{size_summary, symbol_dump, ToolchainConfig};
pub use demangle::{Demangler, DisabledDemangler, ToolDemangler};
pub use runner::{SystemRunner, ToolRunner};
