//! # Snapshot Durability
//!
//! A [`SnapshotFile`] keeps one collection on disk as a single JSON document:
//!
//! ```json
//! { "next_id": 4, "records": [ { "...": "..." } ] }
//! ```
//!
//! `records` preserves insertion order and `next_id` preserves the id sequence, so
//! identifiers are never reused across restarts. Writes go to a sibling temp file which
//! is then renamed over the target, so a crash mid-write leaves the previous snapshot
//! intact.

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub next_id: u32,
    pub records: Vec<T>,
}

#[derive(Serialize)]
struct SnapshotRef<'a, T> {
    next_id: u32,
    records: &'a [&'a T],
}

/// Location of a collection's snapshot on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot, or `Ok(None)` if the file does not exist yet.
    ///
    /// Runs synchronously; it is called once while the actor is being built.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<Snapshot<T>>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Persistence(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };
        let snapshot = serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::Persistence(format!("decode {}: {e}", self.path.display()))
        })?;
        Ok(Some(snapshot))
    }

    /// Atomically replaces the snapshot with the given records.
    pub async fn save<T: Serialize>(&self, next_id: u32, records: &[&T]) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(&SnapshotRef { next_id, records })
            .map_err(|e| StoreError::Persistence(format!("encode snapshot: {e}")))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &body)
            .await
            .map_err(|e| StoreError::Persistence(format!("write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            StoreError::Persistence(format!("rename to {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), records = records.len(), "Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("absent.json"));
        let loaded: Option<Snapshot<String>> = file.load().unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_keeps_order_and_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("words.json"));

        let a = "alpha".to_string();
        let b = "beta".to_string();
        file.save(7, &[&b, &a]).await.unwrap();

        let loaded: Snapshot<String> = file.load().unwrap().unwrap();
        assert_eq!(loaded.next_id, 7);
        assert_eq!(loaded.records, vec!["beta", "alpha"]);
        assert!(!dir.path().join("words.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let result = SnapshotFile::new(&path).load::<String>();
        assert!(matches!(result, Err(StoreError::Persistence(_))));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("nope").join("x.json"));
        let record = "x".to_string();
        let result = file.save(1, &[&record]).await;
        assert!(matches!(result, Err(StoreError::Persistence(_))));
    }
}
