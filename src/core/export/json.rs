// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! JSON report generation
//!
//! Pretty-printed envelope carrying the document metadata alongside the
//! rendered rows:
//!
//! ```json
//! {
//!   "title": "Member registry",
//!   "generated_at": "2026-08-29T10:00:00+02:00",
//!   "date_range": { "start": "2026-01-01", "end": "2026-12-31" },
//!   "summary": [{ "label": "Total members", "value": "120" }],
//!   "rows": [{ "name": "Ada", "status": "active" }]
//! }
//! ```
//!
//! Each row is an object keyed by column key with the rendered cell string,
//! so the same formatting rules apply to every export format.

use super::descriptor::{ExportDescriptor, ExportOptions};
use crate::domain::{Record, Result};
use serde_json::{json, Map, Value};

/// Render the descriptor to a pretty-printed JSON report.
pub fn render<T: Record>(
    descriptor: &ExportDescriptor<T>,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let mut rows = Vec::with_capacity(descriptor.rows.len());
    for row in &descriptor.rows {
        let mut object = Map::new();
        for column in &descriptor.columns {
            object.insert(column.key.clone(), Value::String(column.render(row)?));
        }
        rows.push(Value::Object(object));
    }

    let mut envelope = Map::new();
    envelope.insert("title".to_string(), json!(descriptor.title));
    envelope.insert(
        "generated_at".to_string(),
        json!(chrono::Local::now().to_rfc3339()),
    );
    if let Some(range) = &options.date_range {
        envelope.insert("date_range".to_string(), serde_json::to_value(range)?);
    }
    if !descriptor.summary.is_empty() {
        envelope.insert(
            "summary".to_string(),
            serde_json::to_value(&descriptor.summary)?,
        );
    }
    envelope.insert("rows".to_string(), Value::Array(rows));

    Ok(serde_json::to_vec_pretty(&Value::Object(envelope))?)
}
