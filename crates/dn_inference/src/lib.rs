pub mod models;
pub mod parser;
pub mod phrases;
pub mod summarizer;

pub use models::create_model;
pub use phrases::PhraseGenerator;
pub use summarizer::Summarizer;

/// Model construction options, shared by every backend.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::{Config, PhraseGenerator, Summarizer};
    pub use dn_core::{CompletionModel, CompletionRequest, Error, Result};
}
