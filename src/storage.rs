use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::AppError;

/// Versioned storage keys. Each key maps to one JSON blob holding the whole
/// collection; every mutation is a read-modify-write of that blob.
pub mod keys {
    pub const DEVICE_USER: &str = "deviceUser:v1";
    pub const HOUSEHOLD: &str = "household:v1";
    pub const WEEKLY_PLANS: &str = "weeklyPlans:v1";
    pub const SCHEDULED_MEALS: &str = "scheduledMeals:v1";
    pub const WEB_VOTES: &str = "webVotes:v1";
    pub const WEB_VOTERS: &str = "webVoters:v1";
}

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get_raw(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn put_raw(&self, key: &str, value: String) -> anyhow::Result<()>;
}

/// Read and deserialize a blob. Read and parse failures are logged and
/// masked as absent data, so a transient storage fault degrades to "empty"
/// instead of failing the caller.
pub async fn load<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Option<T> {
    match store.get_raw(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored blob failed to parse, treating as empty");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "storage read failed, treating as empty");
            None
        }
    }
}

/// Serialize and persist a blob. Unlike reads, write failures propagate.
pub async fn save<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("serialize blob for {key}"))?;
    store
        .put_raw(key, raw)
        .await
        .with_context(|| format!("write blob for {key}"))?;
    Ok(())
}

/// File-per-key store: `household:v1` lives in `<data_dir>/household_v1.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub async fn new(dir: &Path) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("create data dir {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.replace(':', "_")))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get_raw(&self, key: &str) -> anyhow::Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {key}")),
        }
    }

    async fn put_raw(&self, key: &str, value: String) -> anyhow::Result<()> {
        // Whole-blob replacement via temp file + rename.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .with_context(|| format!("write {key}"))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("commit {key}"))?;
        Ok(())
    }
}

/// In-memory store for tests and `AppState::fake()`.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get_raw(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn put_raw(&self, key: &str, value: String) -> anyhow::Result<()> {
        self.blobs.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Blob {
        n: u32,
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("mealswipe-store-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn file_store_roundtrip() {
        let dir = temp_dir();
        let store = FileStore::new(&dir).await.expect("create store");
        save(&store, keys::HOUSEHOLD, &Blob { n: 7 })
            .await
            .expect("save");
        let loaded: Option<Blob> = load(&store, keys::HOUSEHOLD).await;
        assert_eq!(loaded, Some(Blob { n: 7 }));
        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let store = MemoryStore::default();
        let loaded: Option<Blob> = load(&store, keys::WEEKLY_PLANS).await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn corrupt_blob_is_masked_as_empty() {
        let store = MemoryStore::default();
        store
            .put_raw(keys::WEEKLY_PLANS, "{not json".into())
            .await
            .expect("put");
        let loaded: Option<Blob> = load(&store, keys::WEEKLY_PLANS).await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn save_overwrites_previous_blob() {
        let store = MemoryStore::default();
        save(&store, keys::DEVICE_USER, &Blob { n: 1 })
            .await
            .expect("save");
        save(&store, keys::DEVICE_USER, &Blob { n: 2 })
            .await
            .expect("save");
        let loaded: Option<Blob> = load(&store, keys::DEVICE_USER).await;
        assert_eq!(loaded, Some(Blob { n: 2 }));
    }
}
