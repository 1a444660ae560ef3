use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory where uploaded audio is staged; the OS temp dir when unset.
    #[serde(default)]
    pub staging_dir: Option<String>,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    #[serde(default = "default_assessment_timeout_secs")]
    pub assessment_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_assessment_timeout_secs() -> u64 {
    30
}

impl SystemConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn staging_path(&self) -> PathBuf {
        self.staging_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
    }

    pub fn assessment_timeout(&self) -> Duration {
        Duration::from_secs(self.assessment_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.assessment_timeout_secs == 0 {
            return Err("assessment_timeout_secs must be greater than 0".to_string());
        }
        if self.max_upload_bytes == 0 {
            return Err("max_upload_bytes must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            staging_dir: None,
            max_upload_bytes: default_max_upload_bytes(),
            assessment_timeout_secs: default_assessment_timeout_secs(),
        }
    }
}
