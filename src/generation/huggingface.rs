use super::{client::TextGenerator, types::*};
use crate::{Error, Result, config::GenerationConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_HF_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Text-generation pipeline hosted behind the Hugging Face Inference API
/// (or any server exposing the same `/models/<id>` contract).
pub struct HuggingFaceGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Debug, Serialize)]
struct PipelineBody<'a> {
    inputs: &'a str,
    parameters: PipelineParameters,
}

#[derive(Debug, Serialize)]
struct PipelineParameters {
    max_length: u16,
    num_return_sequences: u8,
}

#[derive(Debug, Deserialize)]
struct PipelineError {
    error: String,
}

impl HuggingFaceGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        let base_url = if config.base_url.is_empty() {
            DEFAULT_HF_BASE_URL.to_string()
        } else {
            config.base_url
        };
        let endpoint = format!("{}/models/{}", base_url.trim_end_matches('/'), config.model);
        let api_key = Some(config.api_key).filter(|key| !key.is_empty());

        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model: config.model,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<GeneratedSequence>> {
        debug!(
            "Calling text-generation pipeline at {} (max_length={}, num_return_sequences={})",
            self.endpoint,
            request.max_length(),
            request.num_return_sequences()
        );

        let body = PipelineBody {
            inputs: request.prompt(),
            parameters: PipelineParameters {
                max_length: request.max_length(),
                num_return_sequences: request.num_return_sequences(),
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<PipelineError>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            warn!("Model {} returned {}: {}", self.model, status, reason);
            return Err(Error::generation(format!(
                "model {} returned {}: {}",
                self.model, status, reason
            )));
        }

        let text = response.text().await?;
        let sequences: Vec<GeneratedSequence> = serde_json::from_str(&text)?;

        debug!("Received {} generated sequences", sequences.len());

        Ok(sequences)
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}
