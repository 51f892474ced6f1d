// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Filtering primitives
//!
//! This module provides the building blocks the search coordinator combines:
//! - [`FilterValue`] - the current value of one filter, with explicit
//!   active/inactive semantics
//! - [`FilterState`] - the mapping from filter key to current value
//! - [`predicates`] - reusable predicate builders for common filter shapes
//! - [`FilterRegistry`] - the key -> predicate mapping with unique keys

pub mod predicates;
pub mod registry;
pub mod state;
pub mod value;

pub use predicates::Predicate;
pub use registry::FilterRegistry;
pub use state::FilterState;
pub use value::FilterValue;
