// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Filter values with explicit active/inactive semantics
//!
//! The dashboard's filter controls produce values of a handful of shapes:
//! free text, a single number, a multi-select list, a numeric range and a
//! date range. [`FilterValue`] models them as an enum so that "inactive" is
//! an explicit property instead of a falsy-value coercion.
//!
//! A numeric value of `0` is ACTIVE; only empty text, an empty list and a
//! range with both bounds unset count as inactive.

use chrono::NaiveDate;

/// The current value of one filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Free text (exact-match and contains filters)
    Text(String),

    /// A single number (exact-match on numeric fields)
    Number(f64),

    /// A multi-select list of accepted values
    Terms(Vec<String>),

    /// An inclusive numeric range; unset bounds are open
    NumberRange {
        min: Option<f64>,
        max: Option<f64>,
    },

    /// An inclusive date range; unset bounds are open
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Free-text filter value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Multi-select filter value.
    pub fn terms<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Terms(values.into_iter().map(Into::into).collect())
    }

    /// Numeric range filter value.
    pub fn number_range(min: Option<f64>, max: Option<f64>) -> Self {
        Self::NumberRange { min, max }
    }

    /// Date range filter value.
    pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self::DateRange { start, end }
    }

    /// Whether this value participates in filtering.
    ///
    /// Inactive values are excluded from predicate application entirely, so
    /// a predicate never sees an empty text or a fully open range unless it
    /// is invoked directly.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(_) => true,
            Self::Terms(values) => !values.is_empty(),
            Self::NumberRange { min, max } => min.is_some() || max.is_some(),
            Self::DateRange { start, end } => start.is_some() || end.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_inactive() {
        assert!(!FilterValue::text("").is_active());
        assert!(FilterValue::text("active").is_active());
    }

    #[test]
    fn test_zero_number_is_active() {
        // Explicitly not the source's falsy-zero behavior
        assert!(FilterValue::Number(0.0).is_active());
        assert!(FilterValue::Number(25.0).is_active());
    }

    #[test]
    fn test_empty_terms_are_inactive() {
        assert!(!FilterValue::terms(Vec::<String>::new()).is_active());
        assert!(FilterValue::terms(["adherent"]).is_active());
    }

    #[test]
    fn test_open_ranges_are_inactive() {
        assert!(!FilterValue::number_range(None, None).is_active());
        assert!(FilterValue::number_range(Some(10.0), None).is_active());
        assert!(FilterValue::number_range(None, Some(20.0)).is_active());

        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(!FilterValue::date_range(None, None).is_active());
        assert!(FilterValue::date_range(Some(date), None).is_active());
        assert!(FilterValue::date_range(None, Some(date)).is_active());
    }
}
