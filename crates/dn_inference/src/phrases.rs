use std::sync::Arc;

use dn_core::{CompletionModel, CompletionRequest, Result};

use crate::parser::parse_phrases;

const PHRASES_SYSTEM: &str = "You are an English language expert that provides advanced-level \
     phrases, expressions, and vocabulary for discussing news topics.";

pub const DEFAULT_PHRASE_COUNT: usize = 10;

const PHRASES_MAX_TOKENS: u32 = 800;
const PHRASES_TEMPERATURE: f32 = 0.8;

/// Derives advanced vocabulary from an article summary via one model call.
#[derive(Clone)]
pub struct PhraseGenerator {
    model: Arc<dyn CompletionModel>,
}

impl PhraseGenerator {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Returns at most `count` phrases, each with a short gloss. The list is
    /// never empty: unparseable model output is kept whole as one entry.
    pub async fn generate(&self, title: &str, summary: &str, count: usize) -> Result<Vec<String>> {
        let prompt = format!(
            "Based on the following news article, generate {} advanced-level English phrases, \
             expressions, or words useful when discussing it or stating an opinion. \
             Briefly explain the meaning or usage of each one.\n\n\
             News title: {}\nSummary: {}\n\n\
             Format:\n1. phrase/expression/word - explanation\n\nOutput:",
            count, title, summary,
        );

        let response = self
            .model
            .complete(CompletionRequest {
                system: PHRASES_SYSTEM.to_string(),
                prompt,
                max_tokens: PHRASES_MAX_TOKENS,
                temperature: PHRASES_TEMPERATURE,
            })
            .await?;

        Ok(parse_phrases(response.trim(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dn_core::Error;

    struct ListModel;

    #[async_trait]
    impl CompletionModel for ListModel {
        fn name(&self) -> &str {
            "list"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            Ok("1. to gain traction - to become popular\n\
                2. a paradigm shift - a fundamental change\n\
                3. to spearhead an effort - to lead an initiative"
                .to_string())
        }
    }

    struct GibberishModel;

    #[async_trait]
    impl CompletionModel for GibberishModel {
        fn name(&self) -> &str {
            "gibberish"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            Ok("ok".to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl CompletionModel for FailingModel {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            Err(Error::Inference("upstream unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_generates_parsed_phrase_list() {
        let generator = PhraseGenerator::new(Arc::new(ListModel));
        let phrases = generator
            .generate("Headline", "Summary", DEFAULT_PHRASE_COUNT)
            .await
            .unwrap();

        assert_eq!(phrases.len(), 3);
        assert_eq!(phrases[0], "to gain traction - to become popular");
    }

    #[tokio::test]
    async fn test_count_caps_output() {
        let generator = PhraseGenerator::new(Arc::new(ListModel));
        let phrases = generator.generate("Headline", "Summary", 2).await.unwrap();
        assert_eq!(phrases.len(), 2);
    }

    #[tokio::test]
    async fn test_unparseable_output_wrapped_as_single_phrase() {
        let generator = PhraseGenerator::new(Arc::new(GibberishModel));
        let phrases = generator.generate("Headline", "Summary", 10).await.unwrap();
        assert_eq!(phrases, vec!["ok".to_string()]);
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let generator = PhraseGenerator::new(Arc::new(FailingModel));
        let result = generator.generate("Headline", "Summary", 10).await;
        assert!(matches!(result, Err(Error::Inference(_))));
    }
}
