use async_trait::async_trait;
use tokio::sync::RwLock;

use dn_core::{DatasetStore, NewsDataset, Result};

/// Keeps the news document in process memory. Used by tests and by
/// deployments that accept losing data on restart.
pub struct MemoryStore {
    dataset: RwLock<Option<NewsDataset>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            dataset: RwLock::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetStore for MemoryStore {
    async fn save(&self, dataset: &NewsDataset) -> Result<()> {
        *self.dataset.write().await = Some(dataset.clone());
        Ok(())
    }

    async fn load(&self) -> Result<NewsDataset> {
        Ok(self
            .dataset
            .read()
            .await
            .clone()
            .unwrap_or_else(NewsDataset::empty))
    }
}
