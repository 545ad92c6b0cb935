//! Configuration and constants for the CLI.

// Default artifact locations (PlatformIO layout)
pub const DEFAULT_BUILD_DIR: &str = ".pio/build/UNO_R3";
pub const DEFAULT_ELF_NAME: &str = "firmware.elf";
pub const DEFAULT_MAP_NAME: &str = "firmware.map";

// Default toolchain
pub const DEFAULT_TOOL_PREFIX: &str = "avr-";
pub const DEFAULT_MCU: &str = "atmega328p";
pub const DEFAULT_DEMANGLER: &str = "c++filt";

// Report limits
pub const DEFAULT_TOP_SYMBOLS: usize = 50;
pub const DEFAULT_TOP_CLASSES: usize = 30;
pub const MAX_TOP_ENTRIES: usize = 1000;

// nm type codes for text (code) symbols: global/local text, global/local weak
pub const CODE_SYMBOL_TYPES: &[char] = &['T', 't', 'W', 'w'];

/// Itanium C++ ABI mangled-name prefix
pub const MANGLED_PREFIX: &str = "_Z";

/// Namespace / member separator in demangled names
pub const SCOPE_SEPARATOR: &str = "::";

// Linker map markers around the memory region table
pub const MAP_MEMORY_START: &str = "Memory Configuration";
pub const MAP_MEMORY_END: &str = "Linker script";

/// Width of section banners and table rules
pub const BANNER_WIDTH: usize = 80;
