// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! # Kinboard Core
//!
//! Kinboard is the data core of a family-association dashboard: a generic
//! search-and-filter engine over in-memory records and a multi-format export
//! pipeline producing CSV, JSON, XLSX, PDF and ICS artifacts.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Filtering** arbitrary record collections with reusable predicate builders
//! - **Searching** free-text across designated record fields
//! - **Exporting** tabular descriptions to downloadable artifacts
//! - **Debouncing** recomputation triggered by rapid user input
//!
//! ## Architecture
//!
//! Kinboard follows a layered architecture:
//!
//! - [`core`] - Business logic (filter, search, export)
//! - [`adapters`] - Artifact delivery (filesystem, in-memory sinks)
//! - [`domain`] - Record abstraction, value coercions and error types
//! - [`config`] - Configuration structures and validation
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kinboard::adapters::fs::DirectorySink;
//! use kinboard::config::KinboardConfig;
//! use kinboard::core::export::{Column, ExportDescriptor, ExportFormat, ExportOptions, Exporter};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = KinboardConfig::default();
//!     let sink = Arc::new(DirectorySink::new("exports"));
//!     let exporter = Exporter::new(sink, config);
//!
//!     let descriptor = ExportDescriptor::new("Member registry")
//!         .column(Column::new("name", "Name"))
//!         .column(Column::new("status", "Status"))
//!         .rows(vec![json!({"name": "Ada", "status": "active"})]);
//!
//!     let outcome = exporter
//!         .export(&descriptor, ExportFormat::Csv, &ExportOptions::default())
//!         .await;
//!
//!     assert!(outcome.success);
//! }
//! ```
//!
//! ## Filtering
//!
//! Filter predicates are pure functions registered under unique keys and
//! combined with free-text search by the coordinator:
//!
//! ```rust
//! use kinboard::core::filter::{predicates, FilterRegistry, FilterState, FilterValue};
//! use kinboard::core::search::compute;
//! use serde_json::{json, Value};
//!
//! # fn example() -> kinboard::domain::Result<()> {
//! let registry: FilterRegistry<Value> =
//!     FilterRegistry::new().with("status", predicates::exact_match("status"))?;
//!
//! let mut filters = FilterState::new();
//! filters.set("status", FilterValue::text("active"));
//!
//! let data = vec![json!({"name": "Ada", "status": "active"})];
//! let visible = compute(&data, "ada", &["name"], &filters, &registry);
//! assert_eq!(visible.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with the
//! [`domain::KinboardError`] domain type. The export pipeline additionally
//! guarantees that nothing escapes its boundary: every failure is converted
//! into an [`core::export::ExportOutcome`] carrying a human-readable message.
//!
//! ## Logging
//!
//! Kinboard uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(format = "csv", "Starting export");
//! warn!(key = "unknown", "Ignoring filter without a registered predicate");
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
