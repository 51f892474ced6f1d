// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Configuration management
//!
//! Configuration structures with serde derives, sensible defaults and
//! validation. Kinboard carries no persisted configuration file of its own -
//! the hosting application constructs a [`KinboardConfig`] (usually from its
//! own settings) and hands it to the exporter and logging setup.

pub mod schema;

pub use schema::{
    CalendarSettings, DocumentSettings, KinboardConfig, LoggingConfig, SearchSettings,
    SpreadsheetSettings,
};
