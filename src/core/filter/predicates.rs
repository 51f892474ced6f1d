// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Reusable predicate builders for common filter shapes
//!
//! Each builder returns a predicate closed over a field name. Predicates are
//! pure, never raise, and degrade permissively on malformed input: a value
//! shape the predicate does not understand leaves the filter inactive
//! (everything matches). The one deliberate asymmetry: while a numeric or
//! date bound is active, an item value that fails to parse is a NON-match.
//!
//! ```rust
//! use kinboard::core::filter::{predicates, FilterValue};
//! use serde_json::{json, Value};
//!
//! let in_range = predicates::number_range::<Value>("amount");
//! let value = FilterValue::number_range(Some(10.0), Some(20.0));
//!
//! assert!(in_range(&json!({"amount": 15}), &value));
//! assert!(!in_range(&json!({"amount": 21}), &value));
//! assert!(!in_range(&json!({"amount": "abc"}), &value));
//! ```

use super::value::FilterValue;
use crate::domain::record::{as_date, as_number, field_display};
use crate::domain::Record;
use serde_json::Value;
use std::sync::Arc;

/// A filter predicate: decides whether one record satisfies one criterion.
pub type Predicate<T> = Arc<dyn Fn(&T, &FilterValue) -> bool + Send + Sync>;

/// Strict equality against a text or numeric filter value.
///
/// An empty text matches everything (the filter is inactive); a text value
/// compares against string fields only, a numeric value against numeric
/// fields only - mirroring strict equality in the dashboard.
pub fn exact_match<T: Record>(field: impl Into<String>) -> Predicate<T> {
    let field = field.into();
    Arc::new(move |item: &T, value: &FilterValue| match value {
        FilterValue::Text(expected) => {
            if expected.is_empty() {
                return true;
            }
            matches!(item.field(&field), Some(Value::String(actual)) if actual == *expected)
        }
        FilterValue::Number(expected) => item
            .field(&field)
            .as_ref()
            .and_then(as_number)
            .is_some_and(|actual| actual == *expected),
        _ => true,
    })
}

/// Case-insensitive substring match.
///
/// Missing and null field values coerce to the empty string, so they only
/// match an empty filter text (which is inactive anyway).
pub fn contains<T: Record>(field: impl Into<String>) -> Predicate<T> {
    let field = field.into();
    Arc::new(move |item: &T, value: &FilterValue| match value {
        FilterValue::Text(needle) => {
            if needle.is_empty() {
                return true;
            }
            field_display(item, &field)
                .to_lowercase()
                .contains(&needle.to_lowercase())
        }
        _ => true,
    })
}

/// Inclusive numeric range check.
///
/// Both bounds unset: everything matches. With a bound set, a non-numeric
/// item value is a non-match. Numeric strings count as numbers.
pub fn number_range<T: Record>(field: impl Into<String>) -> Predicate<T> {
    let field = field.into();
    Arc::new(move |item: &T, value: &FilterValue| match value {
        FilterValue::NumberRange { min, max } => {
            if min.is_none() && max.is_none() {
                return true;
            }
            let Some(actual) = item.field(&field).as_ref().and_then(as_number) else {
                return false;
            };
            if min.is_some_and(|min| actual < min) {
                return false;
            }
            if max.is_some_and(|max| actual > max) {
                return false;
            }
            true
        }
        _ => true,
    })
}

/// Inclusive date range check.
///
/// Both bounds unset: everything matches. With a bound set, an unparseable
/// item date is a non-match.
pub fn date_range<T: Record>(field: impl Into<String>) -> Predicate<T> {
    let field = field.into();
    Arc::new(move |item: &T, value: &FilterValue| match value {
        FilterValue::DateRange { start, end } => {
            if start.is_none() && end.is_none() {
                return true;
            }
            let Some(actual) = item.field(&field).as_ref().and_then(as_date) else {
                return false;
            };
            if start.is_some_and(|start| actual < start) {
                return false;
            }
            if end.is_some_and(|end| actual > end) {
                return false;
            }
            true
        }
        _ => true,
    })
}

/// Multi-select membership check.
///
/// An empty list matches everything; otherwise the item field's display
/// string must be one of the listed values.
pub fn multi_select<T: Record>(field: impl Into<String>) -> Predicate<T> {
    let field = field.into();
    Arc::new(move |item: &T, value: &FilterValue| match value {
        FilterValue::Terms(accepted) => {
            if accepted.is_empty() {
                return true;
            }
            let actual = field_display(item, &field);
            accepted.iter().any(|term| *term == actual)
        }
        _ => true,
    })
}
