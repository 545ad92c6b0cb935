//! Flash Report
//!
//! Flash memory usage reports for embedded firmware images.
//!
//! Runs the binutils `size`, `nm` and `c++filt` utilities against a
//! firmware ELF file, ranks the largest code symbols, groups code size by
//! C++ class/namespace and prints the memory configuration from the
//! linker map file.
//!
//! This crate provides the core implementation for the
//! `flash-report` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! flash-report report --build-dir .pio/build/UNO_R3
//! flash-report --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod toolchain;
pub mod utils;
