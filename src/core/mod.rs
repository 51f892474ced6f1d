// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Core business logic for Kinboard.
//!
//! # Modules
//!
//! - [`filter`] - Filter values, state and reusable predicate builders
//! - [`search`] - Search-and-filter coordination and input debouncing
//! - [`export`] - Export descriptors, format generators and the pipeline
//!
//! # Filtering Workflow
//!
//! The typical filtering workflow:
//!
//! 1. **Register predicates**: Build a [`filter::FilterRegistry`] from the
//!    predicate builders in [`filter::predicates`]
//! 2. **Track state**: Hold the active filter values in a
//!    [`filter::FilterState`] and the free-text term alongside it
//! 3. **Compute**: Derive the visible subset with [`search::compute`] (or let
//!    a [`search::SearchFilterView`] own the state and recompute on change)
//! 4. **Export**: Describe the visible subset with an
//!    [`export::ExportDescriptor`] and hand it to an [`export::Exporter`]

pub mod export;
pub mod filter;
pub mod search;
