use std::sync::Arc;

use dn_core::{CompletionModel, Error, Result};

use crate::Config;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

/// Builds a completion model by name. Available models: openai, dummy.
pub fn create_model(kind: &str, config: Config) -> Result<Arc<dyn CompletionModel>> {
    match kind {
        "openai" => Ok(Arc::new(OpenAiModel::new(config)?)),
        "dummy" => Ok(Arc::new(DummyModel)),
        other => Err(Error::Inference(format!("Unknown model: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model() {
        assert!(create_model("dummy", Config::default()).is_ok());
        assert!(create_model("openai", Config::default()).is_ok());
        assert!(create_model("invalid", Config::default()).is_err());
    }
}
