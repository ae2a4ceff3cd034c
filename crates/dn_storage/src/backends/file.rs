use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use dn_core::{DatasetStore, NewsDataset, Result};

/// Stores the news document as one pretty-printed UTF-8 JSON file at a
/// well-known path in shared ephemeral storage.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("daily-news").join("news-data.json"))
    }
}

#[async_trait]
impl DatasetStore for FileStore {
    async fn save(&self, dataset: &NewsDataset) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(dataset)?;
        fs::write(&self.path, json).await?;
        debug!("Saved news dataset to {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> Result<NewsDataset> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(NewsDataset::empty()),
            Err(e) => Err(e.into()),
        }
    }
}
