use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use dn_core::{DatasetStore, NewsDataset, ProcessedArticle, Result};
use dn_inference::phrases::DEFAULT_PHRASE_COUNT;
use dn_inference::{PhraseGenerator, Summarizer};

use crate::fetcher::ArticleSource;

/// Drives one fetch → summarize → phrase-generation cycle and persists the
/// resulting dataset.
pub struct NewsPipeline {
    source: Arc<dyn ArticleSource>,
    summarizer: Summarizer,
    generator: PhraseGenerator,
    store: Arc<dyn DatasetStore>,
    phrase_count: usize,
}

impl NewsPipeline {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        summarizer: Summarizer,
        generator: PhraseGenerator,
        store: Arc<dyn DatasetStore>,
    ) -> Self {
        Self {
            source,
            summarizer,
            generator,
            store,
            phrase_count: DEFAULT_PHRASE_COUNT,
        }
    }

    pub fn with_phrase_count(mut self, count: usize) -> Self {
        self.phrase_count = count;
        self
    }

    /// Articles are processed one at a time, strictly in fetch order. Any
    /// inference or storage failure aborts the whole run and nothing is
    /// persisted; there is no partial success.
    pub async fn run(&self) -> Result<NewsDataset> {
        let articles = self.source.fetch().await;
        info!("📰 Fetched {} articles", articles.len());

        let mut news = Vec::with_capacity(articles.len());
        for article in articles {
            info!("🤖 Summarizing: {}", article.title);
            let summary = self
                .summarizer
                .summarize(&article.title, &article.content)
                .await?;

            info!("💬 Generating phrases for: {}", article.title);
            let phrases = self
                .generator
                .generate(&article.title, &summary, self.phrase_count)
                .await?;

            news.push(ProcessedArticle {
                title: article.title,
                url: article.url,
                summary,
                phrases,
                date: article.date,
            });
        }

        let dataset = NewsDataset {
            last_updated: Some(Utc::now()),
            news,
        };
        self.store.save(&dataset).await?;
        info!("💾 Saved dataset with {} articles", dataset.news.len());

        Ok(dataset)
    }
}
