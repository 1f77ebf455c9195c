//! Error types for sdsview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sdsview operations.
pub type Result<T> = std::result::Result<T, SdsError>;

/// Errors that can occur in sdsview.
#[derive(Debug, Error)]
pub enum SdsError {
    /// A catalog source produced a malformed row.
    #[error("Malformed catalog data at line {line}: {reason}")]
    DataSource {
        /// 1-based line in the source (the header is line 1).
        line: u64,
        /// What is wrong with the row.
        reason: String,
    },

    /// Failed to open a catalog file.
    #[error("Failed to open catalog: {path}")]
    CatalogOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdsError {
    /// Create a DataSource error.
    pub fn data_source(line: u64, reason: impl Into<String>) -> Self {
        Self::DataSource {
            line,
            reason: reason.into(),
        }
    }

    /// Create a CatalogOpen error.
    pub fn catalog_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::CatalogOpen { path, source }
    }
}
