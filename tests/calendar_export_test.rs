//! Integration tests for the ICS calendar export
//!
//! Verifies the VCALENDAR envelope, CRLF line endings, UID derivation and
//! the basic-format DTSTART assembled from separate date and time fields.

use kinboard::adapters::fs::MemorySink;
use kinboard::config::KinboardConfig;
use kinboard::core::export::{
    CalendarMapping, Column, ExportDescriptor, ExportFormat, ExportOptions, Exporter,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn activities() -> Vec<Value> {
    vec![json!({
        "id": 42,
        "title": "Spring Cleanup",
        "description": "Annual grounds maintenance",
        "location": "Clubhouse",
        "organizer": "Alice Jansen",
        "date": "2024-05-01",
        "time": "10:00",
        "created_at": "2024-04-01T08:30:00Z"
    })]
}

async fn export_calendar(rows: Vec<Value>) -> String {
    let sink = Arc::new(MemorySink::new());
    let exporter = Exporter::new(sink.clone(), KinboardConfig::default());
    let descriptor = ExportDescriptor::new("Activities")
        .column(Column::new("title", "Title"))
        .rows(rows);
    let options = ExportOptions::default().with_filename("activities.ics");

    let outcome = exporter
        .export(&descriptor, ExportFormat::Calendar, &options)
        .await;
    assert!(outcome.is_success());

    String::from_utf8(sink.take("activities.ics").await.unwrap()).unwrap()
}

#[tokio::test]
async fn test_calendar_envelope_and_event() {
    let ics = export_calendar(activities()).await;

    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(ics.ends_with("END:VCALENDAR"));
    assert!(ics.contains("VERSION:2.0"));
    assert!(ics.contains("CALSCALE:GREGORIAN"));
    assert!(ics.contains("METHOD:PUBLISH"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    assert_eq!(ics.matches("END:VEVENT").count(), 1);
}

#[tokio::test]
async fn test_lines_are_crlf_separated() {
    let ics = export_calendar(activities()).await;

    assert!(ics.contains("\r\n"));
    // No bare line feeds outside the CRLF pairs
    assert!(!ics.replace("\r\n", "").contains('\n'));
}

#[tokio::test]
async fn test_uid_is_row_id_at_configured_domain() {
    let ics = export_calendar(activities()).await;

    assert!(ics.contains("UID:42@kinboard.org"));
}

#[tokio::test]
async fn test_dtstart_combines_date_and_time() {
    let ics = export_calendar(activities()).await;

    assert!(ics.contains("DTSTART:20240501T100000"));
}

#[tokio::test]
async fn test_event_properties_come_from_mapped_fields() {
    let ics = export_calendar(activities()).await;

    assert!(ics.contains("SUMMARY:Spring Cleanup"));
    assert!(ics.contains("DESCRIPTION:Annual grounds maintenance"));
    assert!(ics.contains("LOCATION:Clubhouse"));
    assert!(ics.contains("ORGANIZER:CN=Alice Jansen"));
    assert!(ics.contains("CREATED:20240401T083000Z"));
}

#[tokio::test]
async fn test_event_without_date_omits_dtstart() {
    let ics = export_calendar(vec![json!({
        "id": 7,
        "title": "Date TBD",
        "organizer": "Board"
    })])
    .await;

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    assert!(!ics.contains("DTSTART"));
}

#[tokio::test]
async fn test_event_without_id_gets_a_generated_uid() {
    let ics = export_calendar(vec![json!({
        "title": "Anonymous event",
        "date": "2024-06-01"
    })])
    .await;

    let uid_line = ics
        .lines()
        .find(|line| line.starts_with("UID:"))
        .unwrap()
        .to_string();
    assert!(uid_line.ends_with("@kinboard.org"));
    // UUID fallback: 36 characters before the domain separator
    let local_part = uid_line
        .trim_start_matches("UID:")
        .split('@')
        .next()
        .unwrap();
    assert_eq!(local_part.len(), 36);
}

#[tokio::test]
async fn test_custom_mapping_reads_renamed_fields() {
    let sink = Arc::new(MemorySink::new());
    let exporter = Exporter::new(sink.clone(), KinboardConfig::default());
    let descriptor = ExportDescriptor::new("Activities")
        .column(Column::new("naam", "Naam"))
        .rows(vec![json!({
            "activity_id": 42,
            "naam": "Voorjaarsschoonmaak",
            "datum": "2024-05-01",
            "aanvang": "10:00"
        })]);
    let mapping = CalendarMapping {
        id: "activity_id".to_string(),
        date: "datum".to_string(),
        time: "aanvang".to_string(),
        summary: "naam".to_string(),
        ..CalendarMapping::default()
    };
    let options = ExportOptions::default()
        .with_filename("activities.ics")
        .with_calendar_mapping(mapping);

    let outcome = exporter
        .export(&descriptor, ExportFormat::Calendar, &options)
        .await;
    assert!(outcome.is_success());

    let ics = String::from_utf8(sink.take("activities.ics").await.unwrap()).unwrap();
    assert!(ics.contains("UID:42@kinboard.org"));
    assert!(ics.contains("DTSTART:20240501T100000"));
    assert!(ics.contains("SUMMARY:Voorjaarsschoonmaak"));
}

#[tokio::test]
async fn test_multiple_rows_yield_multiple_events() {
    let mut rows = activities();
    rows.push(json!({
        "id": 43,
        "title": "Summer Fair",
        "date": "2024-07-15",
        "time": "14:30"
    }));

    let ics = export_calendar(rows).await;

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert!(ics.contains("DTSTART:20240715T143000"));
}
