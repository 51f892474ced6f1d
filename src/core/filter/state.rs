// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Filter state
//!
//! The mapping from filter key to current value, owned by the presenting
//! view for as long as it is mounted. Setting and clearing entries is cheap;
//! the coordinator only consults the ACTIVE entries when it recomputes.

use super::value::FilterValue;
use std::collections::HashMap;

/// The current value of every filter, keyed by filter key.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    values: HashMap<String, FilterValue>,
}

impl FilterState {
    /// Create an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a filter key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        self.values.insert(key.into(), value);
    }

    /// Remove the value for a filter key.
    pub fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Remove all filter values.
    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// The current value for a filter key, if any.
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    /// Iterate over the entries whose value is active.
    ///
    /// Inactive values (empty text, empty list, fully open ranges) are
    /// skipped - they behave exactly like absent entries.
    pub fn active_entries(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values
            .iter()
            .filter(|(_, value)| value.is_active())
            .map(|(key, value)| (key.as_str(), value))
    }

    /// The number of active entries.
    pub fn active_count(&self) -> usize {
        self.active_entries().count()
    }

    /// Whether no filters are set at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
