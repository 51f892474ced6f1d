// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Export descriptor
//!
//! The structural description driving every export format: a title, the
//! columns (key, label, optional formatting function), the row source and an
//! optional summary block. One descriptor serves CSV, JSON, XLSX, PDF and
//! ICS generation alike.

use super::calendar::CalendarMapping;
use crate::domain::record::field_display;
use crate::domain::{Record, Result};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A fallible cell formatting function.
///
/// Applied to the raw cell value before serialization. Failures abort the
/// whole export; the pipeline converts them into a failed outcome.
pub type FormatFn = Arc<dyn Fn(&Value) -> Result<String> + Send + Sync>;

/// A per-invocation progress callback (monotonically non-decreasing
/// percentage, approximate).
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// One exported column.
#[derive(Clone)]
pub struct Column {
    /// Field key resolved against each row
    pub key: String,

    /// Human-readable column label
    pub label: String,

    /// Optional formatting function applied to the raw cell value
    pub format: Option<FormatFn>,
}

impl Column {
    /// Create a column rendering the raw value as its display string.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            format: None,
        }
    }

    /// Attach a formatting function applied to the raw cell value.
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(format));
        self
    }

    /// Render this column's cell for one row.
    ///
    /// Missing fields and explicit nulls coerce to the empty string when no
    /// formatting function is attached; a formatting function always sees
    /// the raw value (null for missing fields).
    pub fn render<R: Record>(&self, row: &R) -> Result<String> {
        match &self.format {
            Some(format) => {
                let raw = row.field(&self.key).unwrap_or(Value::Null);
                format(&raw)
            }
            None => Ok(field_display(row, &self.key)),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("format", &self.format.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// One key/value pair in the optional summary block.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEntry {
    /// Summary label (e.g. "Total members")
    pub label: String,

    /// Pre-rendered summary value
    pub value: String,
}

impl SummaryEntry {
    /// Create a summary entry; the value is rendered via `Display`.
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// The structural description driving all export formats.
pub struct ExportDescriptor<T> {
    /// Document title (also the source of the default filename)
    pub title: String,

    /// Column descriptions, in output order
    pub columns: Vec<Column>,

    /// Row source
    pub rows: Vec<T>,

    /// Optional summary block rendered before the data table
    pub summary: Vec<SummaryEntry>,
}

impl<T: Record> ExportDescriptor<T> {
    /// Create a descriptor with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            summary: Vec::new(),
        }
    }

    /// Append a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the row source.
    pub fn rows(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    /// Append a summary entry.
    pub fn summary_entry(mut self, entry: SummaryEntry) -> Self {
        self.summary.push(entry);
        self
    }

    /// Render every cell of one row, in column order.
    pub fn render_row(&self, row: &T) -> Result<Vec<String>> {
        self.columns.iter().map(|column| column.render(row)).collect()
    }

    /// The column labels, in output order.
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }
}

/// Inclusive date-range annotation carried by export options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a date range annotation.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Format-independent export options.
#[derive(Clone, Default)]
pub struct ExportOptions {
    /// Filename override; defaults to a slugified title plus an ISO date stamp
    pub filename: Option<String>,

    /// Optional date-range annotation shown in document metadata
    pub date_range: Option<DateRange>,

    /// Whether the column header line/row is included (CSV, XLSX)
    pub skip_headers: bool,

    /// Field mapping override for calendar exports
    pub calendar_mapping: Option<CalendarMapping>,

    /// Per-invocation progress callback
    pub progress: Option<ProgressFn>,
}

impl ExportOptions {
    /// Override the output filename.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Annotate the export with a date range.
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Omit the column header line/row.
    pub fn without_headers(mut self) -> Self {
        self.skip_headers = true;
        self
    }

    /// Override the field mapping used by calendar exports.
    pub fn with_calendar_mapping(mut self, mapping: CalendarMapping) -> Self {
        self.calendar_mapping = Some(mapping);
        self
    }

    /// Attach a progress callback observed only by this invocation.
    pub fn with_progress<F>(mut self, progress: F) -> Self
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.progress = Some(Arc::new(progress));
        self
    }

    /// Whether headers are included.
    pub fn include_headers(&self) -> bool {
        !self.skip_headers
    }

    /// Report progress to the attached callback, if any.
    pub(crate) fn report_progress(&self, percent: u8) {
        if let Some(progress) = &self.progress {
            progress(percent.min(100));
        }
    }
}

impl fmt::Debug for ExportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportOptions")
            .field("filename", &self.filename)
            .field("date_range", &self.date_range)
            .field("skip_headers", &self.skip_headers)
            .field("calendar_mapping", &self.calendar_mapping)
            .field("progress", &self.progress.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
