// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Artifact delivery adapters
//!
//! The export pipeline generates artifacts in memory and hands the bytes to
//! an [`fs::ArtifactSink`] for delivery - the filesystem in production, a
//! captured map in tests.

pub mod fs;
