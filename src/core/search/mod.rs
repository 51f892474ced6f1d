// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Search-and-filter coordination
//!
//! This module combines free-text search with the active filter set into a
//! single filtered view:
//!
//! - [`compute`] - the pure derivation step (search pass, then predicates)
//! - [`SearchFilterView`] - a stateful wrapper owning data and filter state,
//!   recomputing synchronously on every change
//! - [`Debouncer`] - quiet-period delay for keystroke-driven recomputation

pub mod coordinator;
pub mod debounce;

pub use coordinator::{compute, SearchFilterView};
pub use debounce::Debouncer;
