use async_trait::async_trait;

use crate::types::NewsDataset;
use crate::Result;

/// Owns the persisted news document.
///
/// Storage is ephemeral and best-effort: the document survives for the
/// lifetime of the runtime instance, nothing more. Two concurrent `save`
/// calls race last-writer-wins; the batch runs once a day, so this is
/// documented rather than locked against.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Writes the full document, creating the containing location if absent.
    async fn save(&self, dataset: &NewsDataset) -> Result<()>;

    /// Reads the document back, or returns [`NewsDataset::empty`] if nothing
    /// has ever been saved.
    async fn load(&self) -> Result<NewsDataset>;
}
