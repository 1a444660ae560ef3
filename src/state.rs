use std::sync::Arc;

use crate::assessment::{AssessorFactory, PronunciationAssessor};
use crate::config_manager::Config;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assessor: Arc<dyn PronunciationAssessor>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let assessor = AssessorFactory::create(
            &config.azure_speech,
            config.system_config.assessment_timeout(),
        )?;
        Ok(Self::with_assessor(config, assessor))
    }

    pub fn with_assessor(config: Config, assessor: Arc<dyn PronunciationAssessor>) -> Self {
        Self {
            config: Arc::new(config),
            assessor,
        }
    }
}
