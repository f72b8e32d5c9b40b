use super::MockTextGenerator;
use axum::Router;
use blog_generator::{
    Result,
    blog::BlogGenerator,
    config::{GenerationConfig, LogsConfig, ServerConfig},
    server::{UiController, router},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const GARDENING_PROMPT: &str = "Write a detailed blog post on the topic 'gardening'. The blog should be engaging, informative, and suitable for a general audience.";

/// Build the full router around a shared mock so tests can inspect calls afterwards
pub fn create_test_app(mock: &MockTextGenerator) -> Router {
    let generator = Arc::new(BlogGenerator::new(Box::new(mock.clone())));
    router(UiController::new(generator))
}

/// Generation config pointing the Hugging Face backend at a local mock server
pub fn create_hf_config(base_url: &str, api_key: &str) -> GenerationConfig {
    GenerationConfig {
        provider: "huggingface".to_string(),
        base_url: base_url.to_string(),
        api_key: api_key.to_string(),
        model: "gpt2".to_string(),
    }
}

/// Generation config pointing the OpenAI completions backend at a local mock server
pub fn create_openai_config(base_url: &str) -> GenerationConfig {
    GenerationConfig {
        provider: "openai".to_string(),
        base_url: base_url.to_string(),
        api_key: "sk-test".to_string(),
        model: "gpt-3.5-turbo-instruct".to_string(),
    }
}

pub fn create_test_server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8501,
        logs: LogsConfig {
            level: "debug".to_string(),
        },
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

generation:
  provider: "huggingface"
  base_url: "http://localhost:8080"
  api_key: "hf_test"
  model: "EleutherAI/gpt-neo-2.7B"
"#;

/// Sample configuration with the OpenAI completions backend
pub const SAMPLE_OPENAI_CONFIG_YAML: &str = r#"
generation:
  provider: "openai"
  api_key: "sk-test"
  model: "gpt-3.5-turbo-instruct"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
generation:
  model: [unterminated
"#;
