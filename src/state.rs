use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(FileStore::open(&config.data_dir)?) as Arc<dyn KeyValueStore>;
        Ok(Self { store, config })
    }

    pub fn from_parts(store: Arc<dyn KeyValueStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// Volatile state for tests: nothing outlives the process.
    pub fn in_memory() -> Self {
        let config = Arc::new(AppConfig {
            data_dir: "./data".into(),
        });
        let store = Arc::new(MemoryStore::new()) as Arc<dyn KeyValueStore>;
        Self { store, config }
    }
}
