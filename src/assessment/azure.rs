//! Azure Speech pronunciation assessment over the short-audio REST API.
//!
//! The staged WAV file is posted to the regional recognition endpoint with a
//! `Pronunciation-Assessment` header. The request completes when the service
//! has finished recognition, so one awaited call covers the whole exchange.
//!
//! See: <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/rest-speech-to-text-short>

use std::path::Path;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use tracing::debug;

use super::interface::{AssessmentOutcome, AssessorError, PronunciationAssessor, RecognitionReason};
use super::settings::AssessmentSettings;
use crate::config_manager::AzureSpeechConfig;

/// Header carrying the subscription key.
pub const AZURE_SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header carrying the base64 JSON assessment parameters.
pub const PRONUNCIATION_ASSESSMENT_HEADER: &str = "Pronunciation-Assessment";

pub const RECOGNITION_PATH: &str = "/speech/recognition/conversation/cognitiveservices/v1";

const WAV_CONTENT_TYPE: &str = "audio/wav; codecs=audio/pcm; samplerate=16000";

#[derive(Debug, Clone)]
pub struct AzureAssessor {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
    settings: AssessmentSettings,
}

impl AzureAssessor {
    pub fn new(config: &AzureSpeechConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &AzureSpeechConfig) -> Self {
        let base_url = config
            .endpoint
            .clone()
            .unwrap_or_else(|| config.region().stt_rest_base_url());

        Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            settings: AssessmentSettings::default(),
        }
    }

    pub fn recognition_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), RECOGNITION_PATH)
    }
}

/// Turn a decoded response body into an outcome. The body itself becomes the
/// outcome's document.
pub fn parse_outcome(document: Value) -> Result<AssessmentOutcome, AssessorError> {
    let status = document
        .get("RecognitionStatus")
        .and_then(Value::as_str)
        .ok_or_else(|| AssessorError::Decode("missing RecognitionStatus".to_string()))?;

    let reason = RecognitionReason::from_status(status);
    let text = document
        .get("DisplayText")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(AssessmentOutcome {
        reason,
        text,
        document: Some(document),
    })
}

#[async_trait]
impl PronunciationAssessor for AzureAssessor {
    async fn assess(
        &self,
        audio_path: &Path,
        reference_text: &str,
    ) -> Result<AssessmentOutcome, AssessorError> {
        let audio = tokio::fs::read(audio_path).await?;
        let assessment_header = self.settings.pronunciation_header(reference_text)?;

        debug!(
            "Sending {} bytes to {} (language={})",
            audio.len(),
            self.recognition_url(),
            self.language
        );

        let response = self
            .client
            .post(self.recognition_url())
            .query(&[("language", self.language.as_str()), ("format", "detailed")])
            .header(AZURE_SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header(PRONUNCIATION_ASSESSMENT_HEADER, assessment_header)
            .header(header::CONTENT_TYPE, WAV_CONTENT_TYPE)
            .header(header::ACCEPT, "application/json")
            .body(audio)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssessorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let document: Value = response
            .json()
            .await
            .map_err(|e| AssessorError::Decode(e.to_string()))?;

        parse_outcome(document)
    }

    fn describe(&self) -> String {
        format!("azure ({})", self.base_url)
    }
}
