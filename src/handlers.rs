use std::path::Path;

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::assessment::RecognitionReason;
use crate::errors::{AssessError, AssessResult};
use crate::state::AppState;
use crate::utils::StagedAudio;

pub const AUDIO_FIELD: &str = "audio_file";
pub const REFERENCE_TEXT_FIELD: &str = "reference_text";

/// One upload: WAV bytes plus the sentence the speaker was reading.
#[derive(Debug)]
pub struct AssessmentRequest {
    pub audio: Bytes,
    pub reference_text: String,
}

impl AssessmentRequest {
    /// Collect the `audio_file` part and `reference_text` field. Other parts
    /// are skipped. A blank reference text counts as missing.
    pub async fn from_multipart(mut multipart: Multipart) -> AssessResult<Self> {
        let mut audio = None;
        let mut reference_text = None;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(AUDIO_FIELD) => {
                    audio = Some(field.bytes().await.map_err(multipart_error)?);
                }
                Some(REFERENCE_TEXT_FIELD) => {
                    reference_text = Some(field.text().await.map_err(multipart_error)?);
                }
                other => debug!("Ignoring multipart field {:?}", other),
            }
        }

        let audio = audio.ok_or(AssessError::MissingField(AUDIO_FIELD))?;
        let reference_text = reference_text
            .filter(|text| !text.trim().is_empty())
            .ok_or(AssessError::MissingField(REFERENCE_TEXT_FIELD))?;

        Ok(Self {
            audio,
            reference_text,
        })
    }
}

fn multipart_error(err: MultipartError) -> AssessError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AssessError::PayloadTooLarge
    } else {
        AssessError::InvalidMultipart(err.body_text())
    }
}

/// `POST /assess`
///
/// Stages the audio, waits for the speech service to finish, and returns its
/// result document as `{"result": ...}`. The staged file is gone before the
/// response is built.
pub async fn assess_pronunciation(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AssessResult<Json<Value>> {
    let request_id = Uuid::new_v4();
    let multipart = multipart.map_err(|e| AssessError::InvalidMultipart(e.body_text()))?;
    let request = AssessmentRequest::from_multipart(multipart).await?;

    info!(
        %request_id,
        audio_bytes = request.audio.len(),
        reference_text = %request.reference_text,
        "received assessment request"
    );

    let staging_dir = state.config.system_config.staging_path();
    let mut staged = StagedAudio::stage(&staging_dir, &request.audio)?;

    let document = run_assessment(&state, request_id, staged.path(), &request.reference_text).await;
    staged.cleanup();

    let document = document.ok_or(AssessError::RecognitionFailed)?;
    Ok(Json(json!({ "result": document })))
}

/// Call the assessor under the configured deadline. `None` covers every
/// unsuccessful completion.
async fn run_assessment(
    state: &AppState,
    request_id: Uuid,
    audio_path: &Path,
    reference_text: &str,
) -> Option<Value> {
    let deadline = state.config.system_config.assessment_timeout();
    let call = state.assessor.assess(audio_path, reference_text);

    let outcome = match tokio::time::timeout(deadline, call).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => {
            error!(%request_id, "speech service call failed: {}", e);
            return None;
        }
        Err(_) => {
            warn!(%request_id, "speech service did not complete within {:?}", deadline);
            return None;
        }
    };

    if outcome.reason == RecognitionReason::RecognizedSpeech {
        info!(
            %request_id,
            "Recognized text: {}",
            outcome.text.as_deref().unwrap_or("")
        );
    } else {
        warn!(%request_id, reason = outcome.reason.as_str(), "speech not recognized");
    }

    let document = outcome.into_recognized_document();
    if document.is_none() {
        debug!(%request_id, "no usable result document");
    }
    document
}
