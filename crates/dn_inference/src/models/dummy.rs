use std::fmt;

use async_trait::async_trait;

use dn_core::{CompletionModel, CompletionRequest, Result};

/// Offline stand-in that echoes the first words of the prompt back. Keeps
/// the whole pipeline runnable without an API key.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait]
impl CompletionModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let words: Vec<&str> = request.prompt.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_model_echoes_prompt() {
        let model = DummyModel;
        let response = model
            .complete(CompletionRequest {
                system: String::new(),
                prompt: "This is a test prompt with some words in it".to_string(),
                max_tokens: 100,
                temperature: 0.5,
            })
            .await
            .unwrap();

        assert!(response.starts_with("This is a test prompt"));
    }
}
