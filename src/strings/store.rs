//! String record store with file-based JSON persistence
//!
//! The whole collection lives in memory behind an `RwLock` and is mirrored
//! to a single JSON snapshot on disk:
//!
//! ```text
//! ~/.stringvault/strings.json
//! { "strings": [ ...StringRecord ] }
//! ```
//!
//! Every mutation rewrites the snapshot through a temp file + rename and
//! completes before the call returns, so a successful `create` or
//! `delete_by_id` is durable. Mutations serialize on the write lock; reads
//! may overlap a write and observe either side of it.

use crate::error::{Error, Result};
use crate::strings::types::StringRecord;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Persisted snapshot layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    strings: Vec<StringRecord>,
}

/// Durable store of string records, keyed by content hash and raw value
#[derive(Debug)]
pub struct StringStore {
    path: PathBuf,
    strings: RwLock<Vec<StringRecord>>,
}

impl StringStore {
    /// Open the store at `path`, creating the containing directory and an
    /// empty snapshot if absent.
    ///
    /// A store that fails to open cannot be used; an unreadable or corrupt
    /// snapshot surfaces as [`Error::Initialization`].
    pub async fn open(path: PathBuf) -> Result<Self> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let strings = match tokio::fs::read_to_string(&path).await {
            Ok(data) => {
                let snapshot: Snapshot = serde_json::from_str(&data).map_err(|e| {
                    Error::Initialization(format!(
                        "cannot parse snapshot {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                snapshot.strings
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(Error::Initialization(format!(
                    "cannot read snapshot {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let store = Self {
            path,
            strings: RwLock::new(strings),
        };

        // Make sure the snapshot exists on disk from the first run.
        {
            let guard = store.strings.read().await;
            store.persist(&guard).await?;
        }

        Ok(store)
    }

    /// Default snapshot path (~/.stringvault/strings.json)
    pub fn default_path() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stringvault")
            .join("strings.json")
    }

    /// Find a record by its content hash
    pub async fn find_by_id(&self, id: &str) -> Option<StringRecord> {
        self.strings
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Find a record by its raw value
    pub async fn find_by_value(&self, value: &str) -> Option<StringRecord> {
        self.strings
            .read()
            .await
            .iter()
            .find(|r| r.value == value)
            .cloned()
    }

    /// Append a record and persist before returning.
    ///
    /// Uniqueness pre-checks are the caller's responsibility; the store
    /// appends whatever it is given.
    pub async fn create(&self, record: StringRecord) -> Result<StringRecord> {
        let mut strings = self.strings.write().await;
        strings.push(record.clone());
        self.persist(&strings).await?;
        Ok(record)
    }

    /// Remove at most one record with the given id, persisting the change
    /// before returning. Returns whether a record was actually removed.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let mut strings = self.strings.write().await;
        let Some(index) = strings.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        strings.remove(index);
        self.persist(&strings).await?;
        Ok(true)
    }

    /// All stored records in insertion order
    pub async fn all(&self) -> Vec<StringRecord> {
        self.strings.read().await.clone()
    }

    /// Write the snapshot via temp file + rename so no partial write is
    /// ever visible at the snapshot path.
    async fn persist(&self, strings: &[StringRecord]) -> Result<()> {
        let snapshot = Snapshot {
            strings: strings.to_vec(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use tempfile::TempDir;

    async fn make_store() -> (StringStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = StringStore::open(dir.path().join("strings.json"))
            .await
            .unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_open_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deeply").join("nested").join("strings.json");
        let store = StringStore::open(path.clone()).await.unwrap();
        assert!(path.exists());
        assert!(store.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_by_id_and_value() {
        let (store, _dir) = make_store().await;
        let record = store.create(analyze("level")).await.unwrap();

        assert_eq!(store.find_by_id(&record.id).await.unwrap(), record);
        assert_eq!(store.find_by_value("level").await.unwrap(), record);
        assert!(store.find_by_value("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_miss() {
        let (store, _dir) = make_store().await;
        let record = store.create(analyze("gone")).await.unwrap();

        assert!(store.delete_by_id(&record.id).await.unwrap());
        assert!(store.find_by_id(&record.id).await.is_none());
        // second delete is a no-op
        assert!(!store.delete_by_id(&record.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_all_preserves_insertion_order() {
        let (store, _dir) = make_store().await;
        store.create(analyze("first")).await.unwrap();
        store.create(analyze("second")).await.unwrap();
        store.create(analyze("third")).await.unwrap();

        let values: Vec<String> = store.all().await.into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_records_survive_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strings.json");

        {
            let store = StringStore::open(path.clone()).await.unwrap();
            store.create(analyze("persisted")).await.unwrap();
        }

        let store = StringStore::open(path).await.unwrap();
        let record = store.find_by_value("persisted").await.unwrap();
        assert_eq!(record.value, "persisted");
        assert_eq!(record.properties.length, 9);
    }

    #[tokio::test]
    async fn test_snapshot_layout_is_namespaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strings.json");
        let store = StringStore::open(path.clone()).await.unwrap();
        store.create(analyze("abc")).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json["strings"].is_array());
        assert_eq!(json["strings"][0]["value"], "abc");
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_fails_initialization() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strings.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = StringStore::open(path).await.unwrap_err();
        assert!(matches!(err, Error::Initialization(_)));
    }
}
