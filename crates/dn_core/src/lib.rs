pub mod error;
pub mod inference;
pub mod storage;
pub mod types;

pub use error::Error;
pub use inference::{CompletionModel, CompletionRequest};
pub use storage::DatasetStore;
pub use types::{Article, NewsDataset, ProcessedArticle};

pub type Result<T> = std::result::Result<T, Error>;

/// Truncates `text` to at most `max` characters, never splitting a char.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
