// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Domain models and types for Kinboard.
//!
//! The domain layer provides:
//! - **Record abstraction** ([`Record`]) - dynamic field access over records
//!   of arbitrary shape
//! - **Value coercions** ([`record::display_string`], [`record::as_number`],
//!   [`record::as_date`])
//! - **Error types** ([`KinboardError`])
//! - **Result type alias** ([`Result`])
//!
//! # Records
//!
//! Kinboard is generic over record shape. Anything that can answer
//! "what is the value of field `x`?" is a [`Record`]; `serde_json::Value`
//! objects implement it out of the box, so any `Serialize` type can be
//! turned into a record with `serde_json::to_value`:
//!
//! ```rust
//! use kinboard::domain::Record;
//! use serde_json::json;
//!
//! let member = json!({"name": "Ada", "amount": 25});
//! assert_eq!(member.field("name"), Some(json!("Ada")));
//! assert_eq!(member.field("missing"), None);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, KinboardError>`]:
//!
//! ```rust
//! use kinboard::domain::{KinboardError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(KinboardError::Validation("duplicate filter key".to_string()))
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::KinboardError;
pub use record::Record;
pub use result::Result;
