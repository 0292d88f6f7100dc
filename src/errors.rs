/*!
 * Error types for the subprose application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while loading subtitle sources.
///
/// Any of these fails the whole conversion: a partial document would
/// misrepresent the source material.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A file or archive entry could not be read
    #[error("Failed to read '{name}': {source}")]
    Read {
        /// Source path or `archive/entry` name
        name: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// An archive could not be opened or decompressed
    #[error("Failed to open archive '{name}': {reason}")]
    Archive {
        /// Archive name
        name: String,
        /// Decompression error message
        reason: String,
    },

    /// A directory could not be walked
    #[error("Failed to scan directory '{name}': {reason}")]
    Directory { name: String, reason: String },

    /// An explicitly given input is neither a subtitle, an archive nor a folder
    #[error("Unsupported input '{name}': expected .srt, .zip or a directory")]
    Unsupported { name: String },

    /// A loader task panicked or was cancelled
    #[error("Source loading task failed: {0}")]
    Task(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error while loading sources
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
