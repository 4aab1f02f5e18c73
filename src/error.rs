//! Error taxonomy for node boundaries.
//!
//! Every variant is an input or state error that is reported synchronously to the
//! caller. Delivery failures between nodes never show up here: the transport logs
//! them and hands back a `DeliveryOutcome` instead.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Registration without a usable role or url.
    #[error("{0}")]
    InvalidNode(&'static str),

    #[error("Invalid range format")]
    InvalidRangeFormat { value: String },

    #[error("Range not set")]
    RangeNotSet,

    #[error("Validation failed: {0}")]
    ValidationFailed(&'static str),

    /// Submission arrived without a range at all.
    #[error("Invalid data")]
    InvalidSubmission,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("No file provided")]
    MissingFile,

    #[error("No file selected")]
    EmptyFileName,

    #[error("Error processing file: {0}")]
    Upload(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::Upload(_) | PipelineError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Body returned by every rejected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for PipelineError {
    fn from(rejection: JsonRejection) -> Self {
        PipelineError::MalformedBody(rejection.body_text())
    }
}

impl From<MultipartRejection> for PipelineError {
    fn from(rejection: MultipartRejection) -> Self {
        PipelineError::MalformedBody(rejection.body_text())
    }
}

impl From<MultipartError> for PipelineError {
    fn from(err: MultipartError) -> Self {
        PipelineError::Upload(err.body_text())
    }
}
