use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by the assessment endpoint.
///
/// Each variant maps to a status code and a fixed `{"error": ...}` body.
/// Details from the speech service never reach the caller.
#[derive(Debug, Error)]
pub enum AssessError {
    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Invalid multipart body: {0}")]
    InvalidMultipart(String),

    #[error("Audio payload exceeds the upload limit")]
    PayloadTooLarge,

    #[error("Could not stage audio: {0}")]
    Staging(#[from] std::io::Error),

    #[error("Could not analyze speech")]
    RecognitionFailed,
}

impl AssessError {
    pub fn status(&self) -> StatusCode {
        match self {
            AssessError::MissingField(_) | AssessError::InvalidMultipart(_) => {
                StatusCode::BAD_REQUEST
            }
            AssessError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AssessError::Staging(_) | AssessError::RecognitionFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message placed in the response body.
    pub fn public_message(&self) -> String {
        match self {
            AssessError::MissingField(field) => format!("Missing {}", field),
            AssessError::InvalidMultipart(_) => "Invalid multipart body".to_string(),
            AssessError::PayloadTooLarge => "Audio payload too large".to_string(),
            AssessError::Staging(_) => "Could not stage audio".to_string(),
            AssessError::RecognitionFailed => "Could not analyze speech".to_string(),
        }
    }
}

impl IntoResponse for AssessError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Assessment failed: {}", self);
        } else {
            tracing::warn!("Rejected assessment request: {}", self);
        }

        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}

pub type AssessResult<T> = Result<T, AssessError>;
