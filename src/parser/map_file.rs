//! Linker map file extraction.
//!
//! Only the memory region table between `Memory Configuration` and
//! `Linker script` is used; the rest of the map is not interpreted.

use crate::utils::config::{MAP_MEMORY_END, MAP_MEMORY_START};
use crate::utils::error::MapFileError;
use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

static MEMORY_CONFIG_RE: OnceLock<Regex> = OnceLock::new();

fn memory_config_re() -> &'static Regex {
    MEMORY_CONFIG_RE.get_or_init(|| {
        let pattern = format!(
            "(?s){}(.*?){}",
            regex::escape(MAP_MEMORY_START),
            regex::escape(MAP_MEMORY_END)
        );
        Regex::new(&pattern).expect("memory configuration pattern is valid")
    })
}

/// Extract the memory configuration block from map file text
///
/// **Public** - main entry point for map parsing
///
/// # Returns
/// The text between the two markers, whitespace-trimmed, or `None` when
/// either marker is missing
pub fn extract_memory_configuration(content: &str) -> Option<String> {
    memory_config_re()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Read a map file and extract its memory configuration block
///
/// **Public** - used by the report command
///
/// # Errors
/// * `MapFileError::ReadFailed` - the file could not be read
pub fn read_memory_configuration(path: &Path) -> Result<Option<String>, MapFileError> {
    debug!("Reading map file: {}", path.display());

    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    let block = extract_memory_configuration(&content);
    if block.is_none() {
        debug!("No memory configuration block in {}", path.display());
    }

    Ok(block)
}
