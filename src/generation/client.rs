use super::types::*;
use crate::{Result, config::GenerationConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

/// A pre-trained text-generation capability, consumed as a black box.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<GeneratedSequence>>;

    /// Identifier of the model behind this handle.
    fn model(&self) -> String;
}

/// Completion-style backend speaking the OpenAI API.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<GeneratedSequence>> {
        debug!(
            "Creating completion with model {} (max_tokens={}, n={})",
            self.model,
            request.max_length(),
            request.num_return_sequences()
        );

        let openai_request = openai_types::CreateCompletionRequestArgs::default()
            .model(&self.model)
            .prompt(request.prompt())
            .max_tokens(u32::from(request.max_length()))
            .n(request.num_return_sequences())
            .build()?;

        let response = self.client.completions().create(openai_request).await?;

        debug!(
            "Received completion response with {} choices",
            response.choices.len()
        );

        let mut choices = response.choices;
        choices.sort_by_key(|choice| choice.index);

        Ok(choices
            .into_iter()
            .map(|choice| GeneratedSequence {
                generated_text: choice.text,
            })
            .collect())
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}
