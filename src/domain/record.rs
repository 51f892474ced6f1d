// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Record abstraction and value coercions
//!
//! Kinboard works over records of arbitrary shape - members, events,
//! contributions - supplied by the hosting view. The [`Record`] trait gives
//! the engine dynamic field access without reflection: implementors answer
//! field lookups with `serde_json::Value`, and the free functions in this
//! module define the single place where raw values are coerced to display
//! strings, numbers and dates.

use chrono::NaiveDate;
use serde_json::Value;

/// Dynamic field access over a record of arbitrary shape.
///
/// `field` returns `None` for keys the record does not carry; it must never
/// panic. `serde_json::Value` objects implement this out of the box, so any
/// `Serialize` type can be turned into a record with `serde_json::to_value`.
pub trait Record {
    /// Look up a field by name.
    fn field(&self, key: &str) -> Option<Value>;
}

impl Record for Value {
    fn field(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(key)).cloned()
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, key: &str) -> Option<Value> {
        (**self).field(key)
    }
}

/// Coerce a raw cell value to its display string.
///
/// Strings pass through unquoted, null becomes the empty string, everything
/// else renders via its JSON representation. This mirrors how the dashboard
/// stringifies cells before search matching and export serialization.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The display string of a record field, with missing fields and explicit
/// nulls both coercing to `""`.
pub fn field_display<R: Record>(record: &R, key: &str) -> String {
    record
        .field(key)
        .map(|v| display_string(&v))
        .unwrap_or_default()
}

/// The searchable text of a record field.
///
/// Returns `None` for missing fields and explicit nulls - a null value never
/// matches a search term, as opposed to coercing to the (always matched)
/// empty string.
pub fn field_text<R: Record>(record: &R, key: &str) -> Option<String> {
    match record.field(key)? {
        Value::Null => None,
        value => Some(display_string(&value)),
    }
}

/// Coerce a raw value to a number.
///
/// JSON numbers and booleans convert directly; numeric strings parse.
/// Anything else is `None` - range predicates treat that as a non-match
/// while a bound is active.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Coerce a raw value to a calendar date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 date-times (the date part is taken).
/// Unparseable values are `None` - range predicates treat that as a
/// non-match while a bound is active.
pub fn as_date(value: &Value) -> Option<NaiveDate> {
    let text = match value {
        Value::String(s) => s.trim(),
        _ => return None,
    };

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive())
}
