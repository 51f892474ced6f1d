// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Domain error types
//!
//! This module defines the error hierarchy for Kinboard. All errors are
//! domain-specific and don't expose third-party types; encoder and I/O
//! failures are carried as messages.

use thiserror::Error;

/// Main Kinboard error type
///
/// This is the primary error type used throughout the library. Note that the
/// export pipeline never lets it escape: [`crate::core::export::Exporter`]
/// converts every error into an outcome value at its boundary.
#[derive(Debug, Error)]
pub enum KinboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors (e.g. duplicate filter keys)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export pipeline errors (rendering succeeded, delivery failed)
    #[error("Export error: {0}")]
    Export(String),

    /// Cell formatting errors (a column format function failed)
    #[error("Format error: {0}")]
    Format(String),

    /// Encoding errors from an export backend (CSV, XLSX, PDF)
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for KinboardError {
    fn from(err: std::io::Error) -> Self {
        KinboardError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for KinboardError {
    fn from(err: serde_json::Error) -> Self {
        KinboardError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for KinboardError {
    fn from(err: csv::Error) -> Self {
        KinboardError::Encoding(err.to_string())
    }
}
