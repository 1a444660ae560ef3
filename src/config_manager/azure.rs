use serde::{Deserialize, Serialize};

use crate::assessment::AzureRegion;
use crate::config_manager::utils::has_unresolved_placeholder;

/// Configuration for the Azure Speech pronunciation assessment service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureSpeechConfig {
    #[serde(rename = "api_key")]
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_language")]
    pub language: String,

    /// Overrides the regional REST base URL (private endpoints, local mocks).
    #[serde(default)]
    pub endpoint: Option<String>,
}

fn default_region() -> String {
    "eastus".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

impl AzureSpeechConfig {
    pub fn region(&self) -> AzureRegion {
        // Parsing is infallible: unknown regions become `Custom`.
        self.region.parse().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err(
                "azure_speech.api_key is required (set AZURE_SPEECH_KEY)".to_string(),
            );
        }
        if has_unresolved_placeholder(&self.api_key) {
            return Err(format!(
                "azure_speech.api_key references an unset variable: {}",
                self.api_key
            ));
        }
        if self.region.trim().is_empty() {
            return Err("azure_speech.region must not be empty".to_string());
        }
        if self.language.trim().is_empty() {
            return Err("azure_speech.language must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for AzureSpeechConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: default_region(),
            language: default_language(),
            endpoint: None,
        }
    }
}
