mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = load_from(&config_path).await?;

    if let Ok(url) = env::var("ENGINE_URL") {
        config.engine.base_url = url;
    }
    if let Ok(flag) = env::var("DISABLE_CACHE") {
        config.cache.disabled = parse_flag(&flag);
    }

    validate(&config)?;
    Ok(config)
}

pub async fn load_from(path: &str) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document is valid and yields the defaults
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.engine.base_url.trim().is_empty() {
        return Err(Error::config("engine.base_url must not be empty"));
    }
    Ok(())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
