// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Spreadsheet (XLSX) generation
//!
//! Workbook layout, top to bottom: metadata header block (title, generation
//! timestamp, optional date range), optional summary key/value block, the
//! column header row, then the data rows. Columns are auto-sized to the
//! longer of the label length and the configured minimum width.

use super::descriptor::{ExportDescriptor, ExportOptions};
use crate::config::SpreadsheetSettings;
use crate::domain::{KinboardError, Record, Result};
use rust_xlsxwriter::{Color, Format, Workbook};

// Header fill matching the dashboard's primary blue
const HEADER_FILL: u32 = 0x3B82F6;

/// Render the descriptor to XLSX bytes.
pub fn render<T: Record>(
    descriptor: &ExportDescriptor<T>,
    options: &ExportOptions,
    settings: &SpreadsheetSettings,
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14);
    let section_format = Format::new().set_bold();
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_font_color(Color::White);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Data")
        .map_err(|e| KinboardError::Encoding(e.to_string()))?;

    let mut row: u32 = 0;
    write(worksheet.write_string_with_format(row, 0, &descriptor.title, &title_format))?;
    row += 1;

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    write(worksheet.write_string(row, 0, format!("Generated {generated}")))?;
    row += 1;

    if let Some(range) = &options.date_range {
        write(worksheet.write_string(row, 0, format!("Period: {range}")))?;
        row += 1;
    }
    row += 1; // blank separator

    if !descriptor.summary.is_empty() {
        write(worksheet.write_string_with_format(row, 0, "Summary", &section_format))?;
        row += 1;
        for entry in &descriptor.summary {
            write(worksheet.write_string(row, 0, &entry.label))?;
            write(worksheet.write_string(row, 1, &entry.value))?;
            row += 1;
        }
        row += 1; // blank separator
    }

    if options.include_headers() {
        for (col, column) in descriptor.columns.iter().enumerate() {
            write(worksheet.write_string_with_format(
                row,
                col as u16,
                &column.label,
                &header_format,
            ))?;
        }
        row += 1;
    }

    for record in &descriptor.rows {
        let cells = descriptor.render_row(record)?;
        for (col, cell) in cells.iter().enumerate() {
            write(worksheet.write_string(row, col as u16, cell))?;
        }
        row += 1;
    }

    for (col, column) in descriptor.columns.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, column_width(&column.label, settings))
            .map_err(|e| KinboardError::Encoding(e.to_string()))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| KinboardError::Encoding(e.to_string()))
}

/// Column width in characters, never below the configured minimum.
fn column_width(label: &str, settings: &SpreadsheetSettings) -> f64 {
    (label.chars().count() as f64).max(settings.min_column_width)
}

// Uniform mapping from the writer's error type to the domain error
fn write<W>(result: std::result::Result<W, rust_xlsxwriter::XlsxError>) -> Result<()> {
    result
        .map(|_| ())
        .map_err(|e| KinboardError::Encoding(e.to_string()))
}
