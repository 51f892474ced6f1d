// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Filesystem and in-memory artifact sinks

pub mod sink;

pub use sink::{ArtifactSink, DirectorySink, MemorySink};
