// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Multi-format export pipeline
//!
//! This module renders a single [`ExportDescriptor`] into any of the
//! supported artifact formats:
//! - Delimited text (CSV, every cell quoted)
//! - JSON report envelopes
//! - XLSX workbooks
//! - Paginated PDF reports
//! - ICS calendar feeds
//!
//! The [`Exporter`] coordinates rendering, progress reporting and delivery,
//! and always returns an [`ExportOutcome`] rather than an error.

pub mod calendar;
pub mod delimited;
pub mod descriptor;
pub mod document;
pub mod json;
pub mod outcome;
pub mod pipeline;
pub mod spreadsheet;

pub use calendar::CalendarMapping;
pub use descriptor::{Column, DateRange, ExportDescriptor, ExportOptions, SummaryEntry};
pub use outcome::ExportOutcome;
pub use pipeline::{ExportFormat, Exporter};
