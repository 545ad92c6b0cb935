//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur when invoking an external toolchain utility
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{program}: command not found")]
    NotFound { program: String },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("failed to execute {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("demangling disabled")]
    Disabled,
}

/// Errors that can occur while reading a linker map file
#[derive(Error, Debug)]
pub enum MapFileError {
    #[error("Failed to read map file: {0}")]
    ReadFailed(#[from] std::io::Error),
}
