// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Delimited-text (CSV) generation
//!
//! RFC 4180-style output: the first line carries the column labels (unless
//! headers are disabled), every field is double-quoted, cells come from the
//! column rendering rules (format function or display-string coercion).

use super::descriptor::{ExportDescriptor, ExportOptions};
use crate::domain::{Record, Result};
use csv::{QuoteStyle, WriterBuilder};

/// Render the descriptor to CSV bytes.
pub fn render<T: Record>(
    descriptor: &ExportDescriptor<T>,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    if options.include_headers() {
        writer.write_record(descriptor.labels())?;
    }

    for row in &descriptor.rows {
        writer.write_record(descriptor.render_row(row)?)?;
    }

    writer.flush().map_err(crate::domain::KinboardError::from)?;
    writer
        .into_inner()
        .map_err(|e| crate::domain::KinboardError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::descriptor::Column;
    use serde_json::json;

    fn descriptor() -> ExportDescriptor<serde_json::Value> {
        ExportDescriptor::new("Cotisations")
            .column(Column::new("member", "Member"))
            .column(Column::new("amount", "Amount"))
            .rows(vec![
                json!({"member": "Ada", "amount": 25}),
                json!({"member": "Grace", "amount": null}),
            ])
    }

    #[test]
    fn test_every_cell_is_double_quoted() {
        let bytes = render(&descriptor(), &ExportOptions::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "\"Member\",\"Amount\"");
        assert_eq!(lines[1], "\"Ada\",\"25\"");
        assert_eq!(lines[2], "\"Grace\",\"\"");
    }

    #[test]
    fn test_headers_can_be_omitted() {
        let options = ExportOptions::default().without_headers();
        let bytes = render(&descriptor(), &options).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.lines().next().unwrap().starts_with("\"Ada\""));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_format_fn_error_aborts_generation() {
        let descriptor = ExportDescriptor::new("Broken")
            .column(Column::new("x", "X").with_format(|_| {
                Err(crate::domain::KinboardError::Format("boom".to_string()))
            }))
            .rows(vec![json!({"x": 1})]);

        assert!(render(&descriptor, &ExportOptions::default()).is_err());
    }
}
