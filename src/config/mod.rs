mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let lookup = |name: &str| env::var(name).ok();
    let config_path = config_path(lookup);
    let mut config = load_from_path(&config_path).await?;
    apply_env_overrides(&mut config, lookup);
    Ok(config)
}

fn config_path(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("CONFIG_PATH").unwrap_or_else(|| "config.yaml".to_string())
}

/// Reads a YAML config file. A missing file yields the defaults.
pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(config_path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", config_path);
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(&config_str)?;
    Ok(config)
}

/// Fills an empty API key from the provider's environment variable.
fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if !config.generation.api_key.is_empty() {
        return;
    }
    let key_var = match config.generation.provider.as_str() {
        "openai" => "OPENAI_API_KEY",
        _ => "HF_API_TOKEN",
    };
    if let Some(key) = lookup(key_var) {
        debug!("Using API key from {}", key_var);
        config.generation.api_key = key;
    }
}
