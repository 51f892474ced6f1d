// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted logs
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use kinboard::logging::init_logging;
//! use kinboard::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Dashboard core started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export operation
///
/// # Example
///
/// ```no_run
/// use kinboard::log_export_start;
///
/// log_export_start!("Member List", "csv");
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($title:expr, $format:expr) => {
        tracing::info!(
            title = %$title,
            format = %$format,
            "Starting export"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use kinboard::log_error_with_context;
/// use kinboard::domain::KinboardError;
///
/// let error = KinboardError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
