use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingSystem {
    FivePoint,
    HundredMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Phoneme,
    Word,
    FullText,
}

/// Scoring options sent with every assessment. Fixed for the service, not
/// taken from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSettings {
    pub grading_system: GradingSystem,
    pub granularity: Granularity,
    pub enable_miscue: bool,
    pub enable_prosody: bool,
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            grading_system: GradingSystem::HundredMark,
            granularity: Granularity::Phoneme,
            enable_miscue: true,
            enable_prosody: true,
        }
    }
}

/// Wire form of the `Pronunciation-Assessment` header payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PronunciationAssessmentParams {
    pub reference_text: String,
    pub grading_system: GradingSystem,
    pub granularity: Granularity,
    pub dimension: String,
    pub enable_miscue: bool,
    pub enable_prosody_assessment: bool,
}

impl AssessmentSettings {
    pub fn params(&self, reference_text: &str) -> PronunciationAssessmentParams {
        PronunciationAssessmentParams {
            reference_text: reference_text.to_string(),
            grading_system: self.grading_system,
            granularity: self.granularity,
            dimension: "Comprehensive".to_string(),
            enable_miscue: self.enable_miscue,
            enable_prosody_assessment: self.enable_prosody,
        }
    }

    /// Base64-encoded JSON for the `Pronunciation-Assessment` request header.
    pub fn pronunciation_header(&self, reference_text: &str) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(&self.params(reference_text))?;
        Ok(STANDARD.encode(json))
    }
}
