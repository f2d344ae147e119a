use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::{FileStore, KvStore, MemoryStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(FileStore::new(&config.data_dir).await?) as Arc<dyn KvStore>;
        Ok(Self { store, config })
    }

    pub fn from_parts(store: Arc<dyn KvStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// In-memory state for tests.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            data_dir: std::env::temp_dir(),
            web_vote_host: "https://vote.test".into(),
            deep_link_scheme: "mealswipe".into(),
            fold_web_votes: false,
        });
        let store = Arc::new(MemoryStore::default()) as Arc<dyn KvStore>;
        Self { store, config }
    }
}
