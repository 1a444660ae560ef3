use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tracing::info;

use super::azure::AzureAssessor;
use super::interface::PronunciationAssessor;
use crate::config_manager::AzureSpeechConfig;

/// Factory for pronunciation assessment backends
pub struct AssessorFactory;

impl AssessorFactory {
    /// Create the assessor described by `config`.
    ///
    /// `request_timeout` bounds each HTTP exchange with the service; the
    /// handler applies its own overall deadline on top.
    pub fn create(
        config: &AzureSpeechConfig,
        request_timeout: Duration,
    ) -> Result<Arc<dyn PronunciationAssessor>> {
        info!(
            "Initializing Azure pronunciation assessment: region={}, language={}",
            config.region(),
            config.language
        );

        let client = Client::builder().timeout(request_timeout).build()?;
        let assessor = AzureAssessor::with_client(client, config);

        info!("Assessment endpoint: {}", assessor.recognition_url());
        Ok(Arc::new(assessor))
    }
}
