// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Export pipeline coordinator
//!
//! The [`Exporter`] is the single entry point of the export subsystem: it
//! selects the format generator, drives the progress callback, hands the
//! artifact to the configured sink and folds every failure into an
//! [`ExportOutcome`] instead of returning an error.

use super::calendar;
use super::delimited;
use super::descriptor::{ExportDescriptor, ExportOptions};
use super::document;
use super::json;
use super::outcome::ExportOutcome;
use super::spreadsheet;
use crate::adapters::fs::ArtifactSink;
use crate::config::KinboardConfig;
use crate::domain::{KinboardError, Record, Result};
use std::str::FromStr;
use std::sync::Arc;

/// Output format of one export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, every cell quoted
    Csv,
    /// Pretty-printed JSON report envelope
    Json,
    /// XLSX workbook with a styled report sheet
    Spreadsheet,
    /// Paginated PDF report
    Document,
    /// ICS calendar feed
    Calendar,
}

impl ExportFormat {
    /// The filename extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Spreadsheet => "xlsx",
            Self::Document => "pdf",
            Self::Calendar => "ics",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = KinboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" | "excel" | "spreadsheet" => Ok(Self::Spreadsheet),
            "pdf" | "document" => Ok(Self::Document),
            "ics" | "ical" | "calendar" => Ok(Self::Calendar),
            _ => Err(KinboardError::Format(format!(
                "Invalid export format: {s}. Expected 'csv', 'json', 'xlsx', 'pdf' or 'ics'"
            ))),
        }
    }
}

/// Coordinator rendering descriptors into artifacts and delivering them.
pub struct Exporter {
    sink: Arc<dyn ArtifactSink>,
    config: KinboardConfig,
}

impl Exporter {
    /// Create an exporter delivering artifacts to the given sink.
    pub fn new(sink: Arc<dyn ArtifactSink>, config: KinboardConfig) -> Self {
        Self { sink, config }
    }

    /// Run one export end to end.
    ///
    /// Never returns an error: any failure during rendering or delivery is
    /// captured in the returned [`ExportOutcome`] so callers can surface it
    /// without unwinding.
    pub async fn export<T: Record>(
        &self,
        descriptor: &ExportDescriptor<T>,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> ExportOutcome {
        match self.run(descriptor, format, options).await {
            Ok(filename) => {
                tracing::info!(
                    filename = %filename,
                    format = ?format,
                    rows = descriptor.rows.len(),
                    "Export completed"
                );
                ExportOutcome::completed(filename)
            }
            Err(e) => {
                tracing::error!(
                    title = %descriptor.title,
                    format = ?format,
                    error = %e,
                    "Export failed"
                );
                ExportOutcome::failed(e.to_string())
            }
        }
    }

    async fn run<T: Record>(
        &self,
        descriptor: &ExportDescriptor<T>,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> Result<String> {
        options.report_progress(10);

        let bytes = match format {
            ExportFormat::Csv => delimited::render(descriptor, options)?,
            ExportFormat::Json => json::render(descriptor, options)?,
            ExportFormat::Spreadsheet => {
                spreadsheet::render(descriptor, options, &self.config.spreadsheet)?
            }
            ExportFormat::Document => document::render(
                descriptor,
                options,
                &self.config.document,
                &self.config.organization,
            )?,
            ExportFormat::Calendar => {
                let mapping = options.calendar_mapping.clone().unwrap_or_default();
                calendar::render(
                    &descriptor.rows,
                    &mapping,
                    &self.config.calendar,
                    &self.config.organization,
                )?
            }
        };
        options.report_progress(80);

        let filename = options
            .filename
            .clone()
            .unwrap_or_else(|| default_filename(&descriptor.title, format));

        self.sink
            .persist(&filename, &bytes)
            .await
            .map_err(|e| KinboardError::Export(format!("Failed to deliver {filename}: {e}")))?;
        options.report_progress(100);

        Ok(filename)
    }
}

/// Default filename: slugified title, ISO date stamp, format extension.
fn default_filename(title: &str, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        slugify(title),
        chrono::Local::now().format("%Y-%m-%d"),
        format.extension()
    )
}

/// Lowercase the title and collapse non-alphanumeric runs to underscores.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_separator = true;
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("export");
    }
    slug
}
