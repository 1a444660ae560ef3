use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config_manager::azure::AzureSpeechConfig;
use crate::config_manager::system::SystemConfig;

/// Main configuration for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "azure_speech")]
    #[serde(default)]
    pub azure_speech: AzureSpeechConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &str) -> Result<Self> {
        use crate::config_manager::utils::{read_config_file, validate_config};
        let value = read_config_file(path)?;
        validate_config(&value)
    }

    /// Load the first existing file among `candidates`, or defaults when none
    /// exists. Returns the path that was used.
    ///
    /// A file that exists but fails to parse is an error rather than being
    /// skipped.
    pub fn discover(candidates: &[String]) -> Result<(Self, Option<String>)> {
        for path in candidates {
            if !Path::new(path).exists() {
                debug!("No config file at {}", path);
                continue;
            }
            let config = Self::load(path)
                .with_context(|| format!("Failed to load config from {}", path))?;
            return Ok((config, Some(path.clone())));
        }
        Ok((Self::default(), None))
    }

    /// Apply `AZURE_SPEECH_*`, `HOST` and `PORT` environment overrides.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(key) = std::env::var("AZURE_SPEECH_KEY") {
            self.azure_speech.api_key = key;
        }
        if let Ok(region) = std::env::var("AZURE_SPEECH_REGION") {
            self.azure_speech.region = region;
        }
        if let Ok(language) = std::env::var("AZURE_SPEECH_LANGUAGE") {
            self.azure_speech.language = language;
        }
        if let Ok(endpoint) = std::env::var("AZURE_SPEECH_ENDPOINT") {
            self.azure_speech.endpoint = Some(endpoint);
        }
        if let Ok(host) = std::env::var("HOST") {
            self.system_config.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.system_config.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.system_config
            .validate()
            .map_err(|e| anyhow::anyhow!(e))?;
        self.azure_speech
            .validate()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    }

    /// Discover, override from the environment and validate.
    pub fn from_sources(candidates: &[String]) -> Result<(Self, Option<String>)> {
        let (mut config, loaded_path) = Self::discover(candidates)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok((config, loaded_path))
    }
}
