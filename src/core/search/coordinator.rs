// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Search-and-filter coordinator
//!
//! [`compute`] is a pure function of its inputs: the same data, search term
//! and filter state always produce the same output references in the same
//! relative order. It never duplicates, re-sorts or mutates items. The
//! caller decides when to recompute (typically on every keystroke or filter
//! change, behind a [`super::Debouncer`]).

use crate::core::filter::{FilterRegistry, FilterState};
use crate::domain::record::field_text;
use crate::domain::Record;

/// Derive the visible subset of `data` from the current search term and
/// active filters.
///
/// 1. If the trimmed, lowercased term is non-empty, keep only items where at
///    least one search field's text (lowercased) contains it. Null and
///    missing field values never match on that field.
/// 2. For each ACTIVE filter entry, look up its predicate by key and retain
///    only satisfying items. Unknown filter keys are silently ignored.
///
/// Relative order is preserved (stable filtering, no re-sort).
pub fn compute<'a, T: Record>(
    data: &'a [T],
    search_term: &str,
    search_fields: &[&str],
    filters: &FilterState,
    registry: &FilterRegistry<T>,
) -> Vec<&'a T> {
    compute_indices(data, search_term, search_fields, filters, registry)
        .into_iter()
        .map(|i| &data[i])
        .collect()
}

/// Index-returning form of [`compute`], shared with [`SearchFilterView`]'s
/// derived-value memo.
fn compute_indices<T: Record>(
    data: &[T],
    search_term: &str,
    search_fields: &[&str],
    filters: &FilterState,
    registry: &FilterRegistry<T>,
) -> Vec<usize> {
    let mut result: Vec<usize> = (0..data.len()).collect();

    let term = search_term.trim().to_lowercase();
    if !term.is_empty() {
        result.retain(|&i| {
            search_fields.iter().any(|field| {
                field_text(&data[i], field)
                    .map(|text| text.to_lowercase().contains(&term))
                    .unwrap_or(false)
            })
        });
    }

    for (key, value) in filters.active_entries() {
        match registry.get(key) {
            Some(predicate) => result.retain(|&i| predicate(&data[i], value)),
            None => {
                tracing::debug!(key, "Ignoring filter without a registered predicate");
            }
        }
    }

    result
}

/// A stateful filtered view over a record collection.
///
/// Owns the data, the search term and the filter state for as long as the
/// presenting view is mounted, and recomputes the visible index list
/// synchronously on every change. Counts are derived from the cached list.
///
/// ```rust
/// use kinboard::core::filter::{predicates, FilterRegistry, FilterValue};
/// use kinboard::core::search::SearchFilterView;
/// use serde_json::{json, Value};
///
/// # fn example() -> kinboard::domain::Result<()> {
/// let registry = FilterRegistry::new().with("status", predicates::exact_match("status"))?;
/// let data = vec![
///     json!({"name": "Ada", "status": "active"}),
///     json!({"name": "Grace", "status": "inactive"}),
/// ];
///
/// let mut view = SearchFilterView::new(data, vec!["name".into()], registry);
/// assert_eq!(view.filtered_count(), 2);
///
/// view.set_filter("status", FilterValue::text("active"));
/// assert_eq!(view.filtered_count(), 1);
/// # Ok(())
/// # }
/// ```
pub struct SearchFilterView<T> {
    data: Vec<T>,
    search_fields: Vec<String>,
    search_term: String,
    filters: FilterState,
    registry: FilterRegistry<T>,
    // Derived-value memo over the inputs above
    visible: Vec<usize>,
}

impl<T: Record> SearchFilterView<T> {
    /// Create a view over a record collection.
    pub fn new(data: Vec<T>, search_fields: Vec<String>, registry: FilterRegistry<T>) -> Self {
        let mut view = Self {
            data,
            search_fields,
            search_term: String::new(),
            filters: FilterState::new(),
            registry,
            visible: Vec::new(),
        };
        view.recompute();
        view
    }

    /// Replace the underlying data and recompute.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.recompute();
    }

    /// Set the free-text search term and recompute.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    /// Set one filter value and recompute.
    pub fn set_filter(&mut self, key: impl Into<String>, value: crate::core::filter::FilterValue) {
        self.filters.set(key, value);
        self.recompute();
    }

    /// Clear one filter value and recompute.
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.clear(key);
        self.recompute();
    }

    /// Clear every filter and the search term, restoring the full view.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.search_term.clear();
        self.recompute();
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The currently visible items, in original relative order.
    pub fn filtered(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.data[i]).collect()
    }

    /// Total number of items before filtering.
    pub fn total_count(&self) -> usize {
        self.data.len()
    }

    /// Number of items in the filtered view.
    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    fn recompute(&mut self) {
        let fields: Vec<&str> = self.search_fields.iter().map(String::as_str).collect();
        self.visible = compute_indices(
            &self.data,
            &self.search_term,
            &fields,
            &self.filters,
            &self.registry,
        );

        tracing::debug!(
            total = self.data.len(),
            visible = self.visible.len(),
            active_filters = self.filters.active_count(),
            "Recomputed filtered view"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{predicates, FilterValue};
    use serde_json::{json, Value};

    fn members() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Ada Moukona", "status": "active", "amount": 25}),
            json!({"id": 2, "name": "Grace Ghieme", "status": "inactive", "amount": 0}),
            json!({"id": 3, "name": "Jean Moukona", "status": "active", "amount": 50}),
        ]
    }

    fn registry() -> FilterRegistry<Value> {
        FilterRegistry::new()
            .with("status", predicates::exact_match("status"))
            .unwrap()
            .with("amount", predicates::number_range("amount"))
            .unwrap()
    }

    #[test]
    fn test_compute_identity_without_inputs() {
        let data = members();
        let result = compute(&data, "", &["name"], &FilterState::new(), &registry());

        assert_eq!(result.len(), data.len());
        for (got, expected) in result.iter().zip(data.iter()) {
            assert!(std::ptr::eq(*got, expected));
        }
    }

    #[test]
    fn test_compute_search_is_trimmed_and_case_insensitive() {
        let data = members();
        let result = compute(
            &data,
            "  MOUKONA ",
            &["name"],
            &FilterState::new(),
            &registry(),
        );

        assert_eq!(result.len(), 2);
        assert_eq!(result[0]["id"], 1);
        assert_eq!(result[1]["id"], 3);
    }

    #[test]
    fn test_compute_null_fields_never_match_search() {
        let data = vec![json!({"name": null}), json!({"name": "null"})];
        let result = compute(&data, "null", &["name"], &FilterState::new(), &registry());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_compute_applies_active_filters_only() {
        let data = members();
        let mut filters = FilterState::new();
        filters.set("status", FilterValue::text("active"));
        filters.set("amount", FilterValue::number_range(None, None));

        let result = compute(&data, "", &["name"], &filters, &registry());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_compute_ignores_unknown_filter_keys() {
        let data = members();
        let mut filters = FilterState::new();
        filters.set("unregistered", FilterValue::text("whatever"));

        let result = compute(&data, "", &["name"], &filters, &registry());
        assert_eq!(result.len(), data.len());
    }

    #[test]
    fn test_compute_is_stable_and_idempotent() {
        let data = members();
        let mut filters = FilterState::new();
        filters.set("amount", FilterValue::number_range(Some(10.0), None));

        let first = compute(&data, "moukona", &["name"], &filters, &registry());
        let second = compute(&data, "moukona", &["name"], &filters, &registry());

        let first_ids: Vec<_> = first.iter().map(|m| m["id"].clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|m| m["id"].clone()).collect();
        assert_eq!(first_ids, second_ids);
        assert_eq!(first_ids, vec![json!(1), json!(3)]);
    }

    #[test]
    fn test_view_counts_and_clear() {
        let mut view = SearchFilterView::new(members(), vec!["name".to_string()], registry());
        assert_eq!(view.total_count(), 3);
        assert_eq!(view.filtered_count(), 3);

        view.set_filter("status", FilterValue::text("active"));
        view.set_search_term("ada");
        assert_eq!(view.filtered_count(), 1);
        assert_eq!(view.filtered()[0]["id"], 1);
        assert_eq!(view.total_count(), 3);

        view.clear_filters();
        assert_eq!(view.filtered_count(), 3);
        assert_eq!(view.search_term(), "");
    }

    #[test]
    fn test_view_clear_single_filter() {
        let mut view = SearchFilterView::new(members(), vec!["name".to_string()], registry());
        view.set_filter("status", FilterValue::text("inactive"));
        assert_eq!(view.filtered_count(), 1);

        view.clear_filter("status");
        assert_eq!(view.filtered_count(), 3);
    }

    #[test]
    fn test_view_set_data_recomputes() {
        let mut view = SearchFilterView::new(members(), vec!["name".to_string()], registry());
        view.set_filter("status", FilterValue::text("active"));
        assert_eq!(view.filtered_count(), 2);

        view.set_data(vec![json!({"id": 9, "name": "Solo", "status": "active"})]);
        assert_eq!(view.total_count(), 1);
        assert_eq!(view.filtered_count(), 1);
    }
}
