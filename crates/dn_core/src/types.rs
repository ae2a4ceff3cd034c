use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A scraped news item before summarization. Discarded once folded into a
/// [`ProcessedArticle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub content: String,
    pub date: NaiveDate,
}

/// An article after summarization and phrase generation; the persisted unit.
///
/// `phrases` is never empty: when parsing the model output yields nothing,
/// the raw output is kept as a single entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedArticle {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub phrases: Vec<String>,
    pub date: NaiveDate,
}

/// The full persisted document. Replaced wholesale on every successful run,
/// never merged with prior state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDataset {
    pub last_updated: Option<DateTime<Utc>>,
    pub news: Vec<ProcessedArticle>,
}

impl NewsDataset {
    /// The sentinel returned when nothing has ever been saved.
    pub fn empty() -> Self {
        Self {
            last_updated: None,
            news: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last_updated.is_none() && self.news.is_empty()
    }
}
