// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Export outcome reporting
//!
//! Every export call resolves to an [`ExportOutcome`] - success with the
//! produced filename, or failure with a human-readable message. Errors never
//! propagate past the export boundary; the presenting view turns a failed
//! outcome into a notification and nothing more.

use serde::Serialize;

/// The result of one export invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ExportOutcome {
    /// Whether the artifact was generated and persisted
    pub success: bool,

    /// The produced filename (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Human-readable failure message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportOutcome {
    /// A completed export with the produced filename.
    pub fn completed(filename: impl Into<String>) -> Self {
        Self {
            success: true,
            filename: Some(filename.into()),
            error: None,
        }
    }

    /// A failed export with a human-readable message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: None,
            error: Some(error.into()),
        }
    }

    /// Whether the export completed.
    pub fn is_success(&self) -> bool {
        self.success
    }
}
