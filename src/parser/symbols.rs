//! Parser for `nm --print-size --radix=d` symbol dumps.
//!
//! Each line looks like:
//!
//! ```text
//! 00000618 00000146 T BinaryClock::setup(bool)
//! ```
//!
//! i.e. address, size, one-letter type code, then the (possibly spaced) name.

use crate::utils::config::CODE_SYMBOL_TYPES;
use log::{debug, trace};

/// Classification of an nm type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Text or weak text symbol (`T`, `t`, `W`, `w`)
    Code,
    /// Anything else (data, bss, read-only data, ...)
    Other,
}

impl SymbolKind {
    /// Classify an nm type code
    pub fn from_type_code(code: &str) -> Self {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if CODE_SYMBOL_TYPES.contains(&c) => SymbolKind::Code,
            _ => SymbolKind::Other,
        }
    }
}

/// One sized symbol from the dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    /// Size in bytes
    pub size: u64,

    /// Raw (possibly mangled) name
    pub name: String,

    pub kind: SymbolKind,
}

impl SymbolRecord {
    pub fn new(size: u64, name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            size,
            name: name.into(),
            kind,
        }
    }

    pub fn is_code(&self) -> bool {
        self.kind == SymbolKind::Code
    }
}

/// Parse one line of symbol dump output
///
/// **Public** - building block for `parse_symbol_dump`
///
/// # Returns
/// `None` for lines with fewer than four fields or a size field that is
/// not a non-negative decimal integer
pub fn parse_symbol_line(line: &str) -> Option<SymbolRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return None;
    }

    let size = match parts[1].parse::<u64>() {
        Ok(size) => size,
        Err(_) => {
            trace!("Skipping line with invalid size field: {}", line);
            return None;
        }
    };

    Some(SymbolRecord {
        size,
        name: parts[3..].join(" "),
        kind: SymbolKind::from_type_code(parts[2]),
    })
}

/// Parse a full symbol dump, skipping malformed lines
///
/// **Public** - main entry point for symbol parsing
///
/// # Arguments
/// * `lines` - Lines of nm output (any iterator of string slices)
///
/// # Returns
/// All records, code and non-code, in input order
pub fn parse_symbol_dump<'a, I>(lines: I) -> Vec<SymbolRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut skipped = 0usize;
    let records: Vec<SymbolRecord> = lines
        .into_iter()
        .filter_map(|line| {
            let record = parse_symbol_line(line);
            if record.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            record
        })
        .collect();

    debug!(
        "Parsed {} symbol records ({} lines skipped)",
        records.len(),
        skipped
    );

    records
}
