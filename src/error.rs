use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::shared::{ErrorDetail, ErrorResponse};
use crate::domain::speech::SpeechError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Unprocessable {
        message: String,
        detail: Vec<ErrorDetail>,
    },

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure for a single request field.
    pub fn unprocessable(detail: ErrorDetail) -> Self {
        Self::Unprocessable {
            message: detail.msg.clone(),
            detail: vec![detail],
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream { status, .. } => *status,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            detail: match self {
                Self::Unprocessable { detail, .. } => Some(detail.clone()),
                _ => None,
            },
        }
    }
}

impl From<SpeechError> for AppError {
    fn from(err: SpeechError) -> Self {
        let message = err.to_string();
        match err {
            SpeechError::EmptyInput
            | SpeechError::NoTextExtracted
            | SpeechError::Document(_)
            | SpeechError::MissingAudioUrl => AppError::BadRequest(message),
            SpeechError::InvalidUrlFormat => {
                AppError::unprocessable(ErrorDetail::body_field("url", message, "value_error"))
            }
            SpeechError::NoTranscriptAvailable | SpeechError::TranscriptFetchFailed(_) => {
                AppError::unprocessable(ErrorDetail::body_field("url", message, "transcript_error"))
            }
            SpeechError::Provider { status, .. } => {
                // Only error statuses are relayed as-is.
                match StatusCode::from_u16(status) {
                    Ok(code) if code.is_client_error() || code.is_server_error() => {
                        AppError::Upstream {
                            status: code,
                            message,
                        }
                    }
                    _ => AppError::BadGateway(message),
                }
            }
            SpeechError::ProviderUnreachable(_) | SpeechError::MalformedResponse(_) => {
                AppError::BadGateway(message)
            }
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status.as_u16(), "Request rejected");
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
