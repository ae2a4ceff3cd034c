use async_trait::async_trait;

use crate::Result;

/// A single text-completion request with bounded output and fixed sampling.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// An injected text-completion capability. Components that need model output
/// hold one of these instead of talking to a provider directly, so tests can
/// substitute doubles.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    fn name(&self) -> &str;

    /// Requests one completion and returns the trimmed response text.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
