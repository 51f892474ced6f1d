// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Paginated document (PDF) generation
//!
//! A4 portrait layout: colored title band, generation metadata, optional
//! date range and summary block, then a bordered table with a filled header
//! row and alternating row shading. Rows wrap to additional pages with the
//! header row repeated; a second pass stamps `Page N of M` and the
//! organization line on every page once the total is known.

use super::descriptor::{ExportDescriptor, ExportOptions};
use crate::config::DocumentSettings;
use crate::domain::{KinboardError, Record, Result};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Rect, Rgb,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const BAND_HEIGHT: f32 = 30.0;
const ROW_HEIGHT: f32 = 7.0;
const FOOTER_LIMIT: f32 = 25.0;

// Dashboard palette: primary blue, gray metadata, near-white row shading
const PRIMARY: (f32, f32, f32) = (0.23, 0.51, 0.96);
const GRAY: (f32, f32, f32) = (0.42, 0.45, 0.50);
const SHADE: (f32, f32, f32) = (0.976, 0.98, 0.984);

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render the descriptor to PDF bytes.
pub fn render<T: Record>(
    descriptor: &ExportDescriptor<T>,
    options: &ExportOptions,
    settings: &DocumentSettings,
    organization: &str,
) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(&descriptor.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| KinboardError::Encoding(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| KinboardError::Encoding(e.to_string()))?,
    };

    let mut pages: Vec<(PdfPageIndex, PdfLayerIndex)> = vec![(first_page, first_layer)];
    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    // Title band
    fill_rect(
        &layer,
        0.0,
        PAGE_HEIGHT - BAND_HEIGHT,
        PAGE_WIDTH,
        PAGE_HEIGHT,
        PRIMARY,
    );
    set_fill(&layer, (1.0, 1.0, 1.0));
    layer.use_text(organization, 20.0, Mm(MARGIN), Mm(PAGE_HEIGHT - 20.0), &fonts.bold);
    layer.use_text(
        &descriptor.title,
        12.0,
        Mm(PAGE_WIDTH - MARGIN - text_width(&descriptor.title, 12.0)),
        Mm(PAGE_HEIGHT - 20.0),
        &fonts.regular,
    );

    // Metadata under the band
    let mut cursor = PAGE_HEIGHT - BAND_HEIGHT - 10.0;
    set_fill(&layer, GRAY);
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    layer.use_text(
        format!("Generated {generated}"),
        10.0,
        Mm(MARGIN),
        Mm(cursor),
        &fonts.regular,
    );
    cursor -= 8.0;

    if let Some(range) = &options.date_range {
        layer.use_text(
            format!("Period: {range}"),
            10.0,
            Mm(MARGIN),
            Mm(cursor),
            &fonts.regular,
        );
        cursor -= 8.0;
    }

    // Summary block
    if !descriptor.summary.is_empty() {
        cursor -= 4.0;
        set_fill(&layer, (0.0, 0.0, 0.0));
        layer.use_text("Summary", 14.0, Mm(MARGIN), Mm(cursor), &fonts.bold);
        cursor -= 8.0;

        for entry in &descriptor.summary {
            set_fill(&layer, GRAY);
            layer.use_text(
                format!("{}:", entry.label),
                10.0,
                Mm(MARGIN + 5.0),
                Mm(cursor),
                &fonts.regular,
            );
            set_fill(&layer, (0.0, 0.0, 0.0));
            layer.use_text(&entry.value, 10.0, Mm(100.0), Mm(cursor), &fonts.bold);
            cursor -= 6.5;
        }
        cursor -= 4.0;
    }

    // Table
    let column_count = descriptor.columns.len().max(1);
    let table_width = PAGE_WIDTH - 2.0 * MARGIN;
    let column_width = table_width / column_count as f32;
    let max_chars = (column_width / 1.7).max(4.0) as usize;

    cursor -= ROW_HEIGHT;
    draw_header_row(&layer, descriptor, &fonts, cursor, column_width, max_chars);
    cursor -= ROW_HEIGHT;

    let mut table_top = cursor + 2.0 * ROW_HEIGHT;
    for (index, record) in descriptor.rows.iter().enumerate() {
        if cursor < FOOTER_LIMIT {
            close_table_border(&layer, table_top, cursor + ROW_HEIGHT);

            let (page, page_layer) = doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("Page {}", pages.len() + 1),
            );
            pages.push((page, page_layer));
            layer = doc.get_page(page).get_layer(page_layer);

            cursor = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
            table_top = cursor + ROW_HEIGHT;
            draw_header_row(&layer, descriptor, &fonts, cursor, column_width, max_chars);
            cursor -= ROW_HEIGHT;
        }

        if index % 2 == 1 {
            fill_rect(
                &layer,
                MARGIN,
                cursor - 2.0,
                PAGE_WIDTH - MARGIN,
                cursor + ROW_HEIGHT - 2.0,
                SHADE,
            );
        }

        set_fill(&layer, (0.0, 0.0, 0.0));
        let cells = descriptor.render_row(record)?;
        for (col, cell) in cells.iter().enumerate() {
            layer.use_text(
                truncate(cell, max_chars),
                9.0,
                Mm(MARGIN + col as f32 * column_width + 1.5),
                Mm(cursor),
                &fonts.regular,
            );
        }
        cursor -= ROW_HEIGHT;
    }
    close_table_border(&layer, table_top, cursor + ROW_HEIGHT);

    stamp_footers(&doc, &pages, &fonts, settings, organization);

    doc.save_to_bytes()
        .map_err(|e| KinboardError::Encoding(e.to_string()))
}

fn draw_header_row<T: Record>(
    layer: &PdfLayerReference,
    descriptor: &ExportDescriptor<T>,
    fonts: &Fonts,
    cursor: f32,
    column_width: f32,
    max_chars: usize,
) {
    fill_rect(
        layer,
        MARGIN,
        cursor - 2.0,
        PAGE_WIDTH - MARGIN,
        cursor + ROW_HEIGHT - 2.0,
        PRIMARY,
    );
    set_fill(layer, (1.0, 1.0, 1.0));
    for (col, column) in descriptor.columns.iter().enumerate() {
        layer.use_text(
            truncate(&column.label, max_chars),
            10.0,
            Mm(MARGIN + col as f32 * column_width + 1.5),
            Mm(cursor),
            &fonts.bold,
        );
    }
}

/// Stroke the outer border of the table region drawn on the current page.
fn close_table_border(layer: &PdfLayerReference, top: f32, bottom: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(GRAY.0, GRAY.1, GRAY.2, None)));
    layer.set_outline_thickness(0.4);
    let rect = Rect::new(
        Mm(MARGIN),
        Mm(bottom - 2.0),
        Mm(PAGE_WIDTH - MARGIN),
        Mm(top - 2.0),
    )
    .with_mode(PaintMode::Stroke);
    layer.add_rect(rect);
}

/// Second pass once the page count is known: page numbers and the
/// organization line on every page.
fn stamp_footers(
    doc: &PdfDocumentReference,
    pages: &[(PdfPageIndex, PdfLayerIndex)],
    fonts: &Fonts,
    settings: &DocumentSettings,
    organization: &str,
) {
    let total = pages.len();
    for (number, (page, layer_index)) in pages.iter().enumerate() {
        let layer = doc.get_page(*page).get_layer(*layer_index);
        set_fill(&layer, GRAY);

        let text = format!("Page {} of {}", number + 1, total);
        layer.use_text(
            &text,
            8.0,
            Mm(PAGE_WIDTH / 2.0 - text_width(&text, 8.0) / 2.0),
            Mm(10.0),
            &fonts.regular,
        );

        let credit = format!("{organization} - {}", settings.footer_note);
        layer.use_text(
            &credit,
            8.0,
            Mm(PAGE_WIDTH - MARGIN - text_width(&credit, 8.0)),
            Mm(10.0),
            &fonts.regular,
        );
    }
}

fn set_fill(layer: &PdfLayerReference, (r, g, b): (f32, f32, f32)) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

fn fill_rect(
    layer: &PdfLayerReference,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    color: (f32, f32, f32),
) {
    set_fill(layer, color);
    let rect = Rect::new(Mm(x1), Mm(y1), Mm(x2), Mm(y2)).with_mode(PaintMode::Fill);
    layer.add_rect(rect);
}

/// Approximate Helvetica text width in millimetres, good enough for
/// right-aligning and centering short lines.
fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.5 * 0.3528
}

/// Clip cell text to the column, marking the cut with an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::descriptor::{Column, SummaryEntry};
    use serde_json::json;

    fn settings() -> DocumentSettings {
        DocumentSettings::default()
    }

    #[test]
    fn test_render_produces_pdf() {
        let descriptor = ExportDescriptor::new("Member registry")
            .column(Column::new("name", "Name"))
            .column(Column::new("status", "Status"))
            .rows(vec![
                json!({"name": "Ada", "status": "active"}),
                json!({"name": "Grace", "status": "inactive"}),
            ])
            .summary_entry(SummaryEntry::new("Total members", 2));

        let bytes = render(
            &descriptor,
            &ExportOptions::default(),
            &settings(),
            "Kinboard",
        )
        .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_render_many_rows_paginates() {
        let rows: Vec<_> = (0..200)
            .map(|i| json!({"name": format!("Member {i}"), "status": "active"}))
            .collect();
        let descriptor = ExportDescriptor::new("Long registry")
            .column(Column::new("name", "Name"))
            .column(Column::new("status", "Status"))
            .rows(rows);

        let bytes = render(
            &descriptor,
            &ExportOptions::default(),
            &settings(),
            "Kinboard",
        )
        .unwrap();

        // Multiple page objects end up in the cross-reference table
        assert!(bytes.starts_with(b"%PDF"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Type /Pages") || text.contains("/Type/Pages"));
    }

    #[test]
    fn test_truncate_marks_clipped_cells() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long cell value", 10), "a very ...");
    }

    #[test]
    fn test_format_fn_error_aborts_generation() {
        let descriptor = ExportDescriptor::new("Broken")
            .column(
                Column::new("x", "X")
                    .with_format(|_| Err(KinboardError::Format("boom".to_string()))),
            )
            .rows(vec![json!({"x": 1})]);

        let result = render(
            &descriptor,
            &ExportOptions::default(),
            &settings(),
            "Kinboard",
        );
        assert!(result.is_err());
    }
}
