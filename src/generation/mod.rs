mod client;
mod huggingface;
mod types;

#[cfg(test)]
pub use client::MockTextGenerator;
pub use client::{OpenAiGenerator, TextGenerator};
pub use huggingface::{DEFAULT_HF_BASE_URL, HuggingFaceGenerator};
pub use types::{GeneratedSequence, GenerationRequest, MAX_LENGTH, NUM_RETURN_SEQUENCES};

use crate::{Error, Result, config::GenerationConfig};
use tracing::info;

/// Builds the process-wide generation handle for the configured provider.
pub fn create_text_generator(config: &GenerationConfig) -> Result<Box<dyn TextGenerator>> {
    info!(
        "Initializing {} text generator with model {}",
        config.provider, config.model
    );

    match config.provider.as_str() {
        "huggingface" => Ok(Box::new(HuggingFaceGenerator::new(config.clone()))),
        "openai" => Ok(Box::new(OpenAiGenerator::new(config.clone()))),
        other => Err(Error::config(format!(
            "Unknown generation provider: '{}'. Valid providers: huggingface, openai",
            other
        ))),
    }
}
