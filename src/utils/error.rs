//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Malformed probe text is never an error: the parser degrades to absent
//! fields instead. Only setup problems surface here.

use thiserror::Error;

/// Errors that can occur while building the run parser
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid extraction pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors that can occur while collecting raw probe runs
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Invalid probe command: {0}")]
    InvalidCommand(String),

    #[error("Cannot read capture directory {path}: {source}")]
    CaptureDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to archive raw run: {0}")]
    Archive(#[from] std::io::Error),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No hop has latency data to chart")]
    EmptyHops,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
