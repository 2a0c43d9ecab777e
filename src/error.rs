use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const INVALID_METHOD_MESSAGE: &str = "Invalid request method.";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body.";

/// Which upstream stage failed, as reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamFailure {
    Translation,
    Synthesis,
    Timeout,
}

impl UpstreamFailure {
    pub fn code(&self) -> &'static str {
        match self {
            UpstreamFailure::Translation => "translation_failed",
            UpstreamFailure::Synthesis => "synthesis_failed",
            UpstreamFailure::Timeout => "upstream_timeout",
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            UpstreamFailure::Translation => "Translation service is unavailable.",
            UpstreamFailure::Synthesis => "Speech synthesis service is unavailable.",
            UpstreamFailure::Timeout => "Upstream service timed out.",
        }
    }
}

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", INVALID_METHOD_MESSAGE)]
    MethodNotAllowed,

    #[error("{detail}")]
    Upstream {
        failure: UpstreamFailure,
        detail: String,
        expose_detail: bool,
    },
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code, independent of any upstream message
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::Upstream { failure, .. } => failure.code(),
        }
    }

    /// Convert to the client-facing error body
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            Self::Upstream {
                failure,
                detail,
                expose_detail,
            } => {
                if *expose_detail {
                    detail.clone()
                } else {
                    failure.public_message().to_string()
                }
            }
            other => other.to_string(),
        };

        ErrorResponse {
            error,
            code: self.code().to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!(error = %err, "Rejected request body");
        AppError::BadRequest(INVALID_JSON_MESSAGE.to_string())
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full detail goes to the logs regardless of what the client sees
        let status = self.status_code();
        tracing::error!(
            error = %self,
            code = self.code(),
            status = %status.as_u16(),
            "Request failed"
        );

        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
