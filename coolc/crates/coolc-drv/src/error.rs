//! Error handling module for the coolc-lex driver.
//!
//! Lexical errors never show up here; they are diagnostics. This type
//! covers the failures that stop the driver before or around the scan.

use std::path::PathBuf;

use thiserror::Error;

/// Startup and I/O failures of the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration file missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input source could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Input {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Logging could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Error when writing output fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
