use std::sync::Arc;

use dn_core::DatasetStore;
use dn_inference::{PhraseGenerator, Summarizer};
use dn_scraper::NewsPipeline;

/// Everything the handlers need, shared behind one `Arc`.
pub struct AppState {
    pub pipeline: NewsPipeline,
    pub store: Arc<dyn DatasetStore>,
    pub summarizer: Summarizer,
    pub generator: PhraseGenerator,
}
