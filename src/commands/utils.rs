//! Small informational commands.

/// Display version information
pub fn display_version() {
    println!("Flash Report v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Flash memory usage reports for embedded firmware images.");
}
