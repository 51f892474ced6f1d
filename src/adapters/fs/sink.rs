// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Artifact sinks
//!
//! An [`ArtifactSink`] receives the generated artifact bytes and delivers
//! them - the counterpart of the browser's client-side file save. The
//! pipeline only ever hands a sink a filename and bytes; path handling and
//! durability are the sink's concern.

use crate::domain::{KinboardError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Delivery target for generated export artifacts.
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    /// Persist one artifact under the given filename.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the artifact cannot be delivered.
    async fn persist(&self, filename: &str, bytes: &[u8]) -> Result<()>;
}

/// Sink writing artifacts into a directory, creating it on first use.
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    /// Create a sink rooted at the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory artifacts are written into.
    pub fn directory(&self) -> &std::path::Path {
        &self.directory
    }
}

#[async_trait]
impl ArtifactSink for DirectorySink {
    async fn persist(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| {
                KinboardError::Io(format!(
                    "Failed to create export directory {}: {e}",
                    self.directory.display()
                ))
            })?;

        let path = self.directory.join(filename);
        let mut file = tokio::fs::File::create(&path).await.map_err(|e| {
            KinboardError::Io(format!("Failed to create {}: {e}", path.display()))
        })?;

        file.write_all(bytes).await.map_err(|e| {
            KinboardError::Io(format!("Failed to write {}: {e}", path.display()))
        })?;
        file.flush().await.map_err(|e| {
            KinboardError::Io(format!("Failed to flush {}: {e}", path.display()))
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Persisted artifact");
        Ok(())
    }
}

/// Sink capturing artifacts in memory, for tests and previews.
#[derive(Default)]
pub struct MemorySink {
    artifacts: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySink {
    /// Create an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a captured artifact by filename.
    pub async fn take(&self, filename: &str) -> Option<Vec<u8>> {
        self.artifacts.lock().await.remove(filename)
    }

    /// Filenames of all captured artifacts.
    pub async fn filenames(&self) -> Vec<String> {
        self.artifacts.lock().await.keys().cloned().collect()
    }
}

#[async_trait]
impl ArtifactSink for MemorySink {
    async fn persist(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        self.artifacts
            .lock()
            .await
            .insert(filename.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_directory_sink_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let sink = DirectorySink::new(temp.path().join("exports"));

        sink.persist("members.csv", b"\"a\",\"b\"").await.unwrap();

        let written = std::fs::read(temp.path().join("exports/members.csv")).unwrap();
        assert_eq!(written, b"\"a\",\"b\"");
    }

    #[tokio::test]
    async fn test_directory_sink_overwrites_existing_artifact() {
        let temp = TempDir::new().unwrap();
        let sink = DirectorySink::new(temp.path());

        sink.persist("report.json", b"first").await.unwrap();
        sink.persist("report.json", b"second").await.unwrap();

        let written = std::fs::read(temp.path().join("report.json")).unwrap();
        assert_eq!(written, b"second");
    }

    #[tokio::test]
    async fn test_memory_sink_captures_artifacts() {
        let sink = MemorySink::new();

        sink.persist("a.csv", b"one").await.unwrap();
        sink.persist("b.csv", b"two").await.unwrap();

        let mut names = sink.filenames().await;
        names.sort();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
        assert_eq!(sink.take("a.csv").await, Some(b"one".to_vec()));
        assert_eq!(sink.take("a.csv").await, None);
    }
}
