use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Why the speech service finished recognition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionReason {
    RecognizedSpeech,
    NoMatch,
    InitialSilenceTimeout,
    BabbleTimeout,
    Error,
    Other(String),
}

impl RecognitionReason {
    /// Map the service's `RecognitionStatus` field.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Success" => Self::RecognizedSpeech,
            "NoMatch" => Self::NoMatch,
            "InitialSilenceTimeout" => Self::InitialSilenceTimeout,
            "BabbleTimeout" => Self::BabbleTimeout,
            "Error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::RecognizedSpeech => "RecognizedSpeech",
            Self::NoMatch => "NoMatch",
            Self::InitialSilenceTimeout => "InitialSilenceTimeout",
            Self::BabbleTimeout => "BabbleTimeout",
            Self::Error => "Error",
            Self::Other(status) => status,
        }
    }
}

/// Result of one assessment call.
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    pub reason: RecognitionReason,
    pub text: Option<String>,
    /// The service's structured result, passed through untouched.
    pub document: Option<Value>,
}

impl AssessmentOutcome {
    /// The document, but only for a successful recognition.
    pub fn into_recognized_document(self) -> Option<Value> {
        match self.reason {
            RecognitionReason::RecognizedSpeech => self.document,
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AssessorError {
    #[error("failed to read staged audio: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode assessment parameters: {0}")]
    Params(#[from] serde_json::Error),

    #[error("speech service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode speech service response: {0}")]
    Decode(String),
}

/// Pronunciation assessment backend.
#[async_trait]
pub trait PronunciationAssessor: Send + Sync {
    /// Assess the WAV file at `audio_path` against `reference_text`.
    ///
    /// Resolves once the service has reported completion.
    async fn assess(
        &self,
        audio_path: &Path,
        reference_text: &str,
    ) -> Result<AssessmentOutcome, AssessorError>;

    /// Short label for logs and the health endpoint.
    fn describe(&self) -> String;
}
