#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;

use pronunciation_service::assessment::{
    AssessmentOutcome, AssessorError, PronunciationAssessor, RecognitionReason,
};
use pronunciation_service::config_manager::Config;

pub const BOUNDARY: &str = "assess-test-boundary";

/// What the stub saw when it was called.
#[derive(Debug, Clone)]
pub struct SeenCall {
    pub path: PathBuf,
    pub existed: bool,
    pub bytes: Vec<u8>,
    pub reference_text: String,
}

pub enum StubBehavior {
    Respond(AssessmentOutcome),
    Fail,
    Hang,
}

pub struct StubAssessor {
    behavior: StubBehavior,
    calls: Mutex<Vec<SeenCall>>,
}

impl StubAssessor {
    pub fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<SeenCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PronunciationAssessor for StubAssessor {
    async fn assess(
        &self,
        audio_path: &Path,
        reference_text: &str,
    ) -> Result<AssessmentOutcome, AssessorError> {
        self.calls.lock().unwrap().push(SeenCall {
            path: audio_path.to_path_buf(),
            existed: audio_path.exists(),
            bytes: std::fs::read(audio_path).unwrap_or_default(),
            reference_text: reference_text.to_string(),
        });

        match &self.behavior {
            StubBehavior::Respond(outcome) => Ok(outcome.clone()),
            StubBehavior::Fail => Err(AssessorError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            }),
            StubBehavior::Hang => {
                std::future::pending::<Result<AssessmentOutcome, AssessorError>>().await
            }
        }
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

pub fn recognized(document: Value) -> AssessmentOutcome {
    AssessmentOutcome {
        reason: RecognitionReason::RecognizedSpeech,
        text: document
            .get("DisplayText")
            .and_then(Value::as_str)
            .map(str::to_string),
        document: Some(document),
    }
}

pub fn not_recognized(reason: RecognitionReason) -> AssessmentOutcome {
    AssessmentOutcome {
        reason,
        text: None,
        document: None,
    }
}

/// Config pointing staging at `staging` with a placeholder key.
pub fn test_config(staging: &TempDir) -> Config {
    let mut config = Config::default();
    config.system_config.staging_dir = Some(staging.path().to_str().unwrap().to_string());
    config.system_config.assessment_timeout_secs = 5;
    config.azure_speech.api_key = "test-key".to_string();
    config
}

pub fn staged_file_count(staging: &TempDir) -> usize {
    std::fs::read_dir(staging.path()).unwrap().count()
}

/// One second of 16 kHz mono silence per `seconds`.
pub fn silent_wav(seconds: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for _ in 0..(16000 * seconds) {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

/// Build a `multipart/form-data` body with the optional parts.
pub fn multipart_body(audio: Option<&[u8]>, reference_text: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(audio) = audio {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"audio_file\"; filename=\"clip.wav\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: audio/wav\r\n\r\n");
        body.extend_from_slice(audio);
        body.extend_from_slice(b"\r\n");
    }
    if let Some(text) = reference_text {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"reference_text\"\r\n\r\n");
        body.extend_from_slice(text.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn assess_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/assess")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
