// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Calendar feed (ICS) generation
//!
//! Emits one `VEVENT` per row inside a `VCALENDAR` wrapper, with CRLF line
//! endings and date-times in basic (non-extended) local format. The `UID` is
//! stable across exports: it derives from the row's own identifier and the
//! configured domain (`{id}@{domain}`); only rows without an identifier fall
//! back to a fresh UUID.

use crate::config::CalendarSettings;
use crate::domain::record::field_display;
use crate::domain::{Record, Result};
use uuid::Uuid;

/// Maps VEVENT properties to row field names.
#[derive(Debug, Clone)]
pub struct CalendarMapping {
    /// Row identifier feeding the stable `UID`
    pub id: String,
    /// Event date (`YYYY-MM-DD`)
    pub date: String,
    /// Event start time (`HH:MM`)
    pub time: String,
    /// `SUMMARY` source
    pub summary: String,
    /// `DESCRIPTION` source
    pub description: String,
    /// `LOCATION` source
    pub location: String,
    /// `ORGANIZER` common name source
    pub organizer: String,
    /// Optional `CREATED` stamp source (RFC 3339)
    pub created: String,
}

impl Default for CalendarMapping {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            date: "date".to_string(),
            time: "time".to_string(),
            summary: "title".to_string(),
            description: "description".to_string(),
            location: "location".to_string(),
            organizer: "organizer".to_string(),
            created: "created_at".to_string(),
        }
    }
}

/// Render rows to an ICS calendar feed.
pub fn render<T: Record>(
    rows: &[T],
    mapping: &CalendarMapping,
    settings: &CalendarSettings,
    organization: &str,
) -> Result<Vec<u8>> {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:-//{}//{}//EN", organization, settings.product),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    for row in rows {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}@{}", event_uid(row, mapping), settings.domain));

        if let Some(dtstart) = dtstart(row, mapping) {
            lines.push(format!("DTSTART:{dtstart}"));
        }

        lines.push(format!("SUMMARY:{}", field_display(row, &mapping.summary)));
        lines.push(format!(
            "DESCRIPTION:{}",
            field_display(row, &mapping.description)
        ));
        lines.push(format!("LOCATION:{}", field_display(row, &mapping.location)));
        lines.push(format!(
            "ORGANIZER:CN={}",
            field_display(row, &mapping.organizer)
        ));

        if let Some(created) = created_stamp(row, mapping) {
            lines.push(format!("CREATED:{created}"));
        }

        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    Ok(lines.join("\r\n").into_bytes())
}

/// The stable event identifier: the row's own id, or a fresh UUID when the
/// row carries none.
fn event_uid<T: Record>(row: &T, mapping: &CalendarMapping) -> String {
    let id = field_display(row, &mapping.id);
    if id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        id
    }
}

/// Basic-format local date-time, combining the row's date and time fields:
/// `2024-05-01` + `10:00` becomes `20240501T100000`.
fn dtstart<T: Record>(row: &T, mapping: &CalendarMapping) -> Option<String> {
    let date = field_display(row, &mapping.date).replace('-', "");
    if date.is_empty() {
        return None;
    }

    let mut time = field_display(row, &mapping.time).replace(':', "");
    if time.is_empty() {
        time.push_str("0000");
    }
    if time.len() == 4 {
        time.push_str("00");
    }

    Some(format!("{date}T{time}"))
}

/// Basic-format UTC `CREATED` stamp from an RFC 3339 source field.
fn created_stamp<T: Record>(row: &T, mapping: &CalendarMapping) -> Option<String> {
    let raw = field_display(row, &mapping.created);
    if raw.is_empty() {
        return None;
    }
    let stripped = raw.replace(['-', ':'], "");
    let basic = stripped.split('.').next().unwrap_or(&stripped);
    Some(format!("{}Z", basic.trim_end_matches('Z')))
}
