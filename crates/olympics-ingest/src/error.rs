//! Error types for Olympic Games data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the datasets.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Data directory not found.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Dataset file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Lookup Errors ===
    /// Unknown dataset name.
    #[error("unknown dataset '{name}' (expected hosts, medals, results or athletes)")]
    UnknownDataset { name: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
