use std::sync::Arc;

use dn_core::{truncate_chars, CompletionModel, CompletionRequest, Result};

const SUMMARY_SYSTEM: &str =
    "You are a helpful assistant that summarizes news articles concisely in English.";

/// Body text beyond this many characters adds cost without improving the
/// summary, so the prompt embeds only the head of the article.
const MAX_CONTENT_CHARS: usize = 3000;

const SUMMARY_MAX_TOKENS: u32 = 200;
const SUMMARY_TEMPERATURE: f32 = 0.7;

/// Produces a short English summary of one article via a single model call.
#[derive(Clone)]
pub struct Summarizer {
    model: Arc<dyn CompletionModel>,
}

impl Summarizer {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    pub async fn summarize(&self, title: &str, content: &str) -> Result<String> {
        let prompt = format!(
            "Summarize the following news article concisely (around 100-150 words).\n\n\
             Title: {}\n\nBody:\n{}\n\nSummary:",
            title,
            truncate_chars(content, MAX_CONTENT_CHARS),
        );

        let response = self
            .model
            .complete(CompletionRequest {
                system: SUMMARY_SYSTEM.to_string(),
                prompt,
                max_tokens: SUMMARY_MAX_TOKENS,
                temperature: SUMMARY_TEMPERATURE,
            })
            .await?;

        Ok(response.trim().to_string())
    }
}
