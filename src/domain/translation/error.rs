use crate::error::{AppError, UpstreamFailure};
use crate::infrastructure::repositories::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("translation failed: {0}")]
    Translation(#[source] UpstreamError),
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[source] UpstreamError),
}

impl TranslationServiceError {
    /// Convert to the HTTP error. `expose_detail` decides whether the
    /// upstream message reaches the client or only the logs.
    pub fn into_app_error(self, expose_detail: bool) -> AppError {
        let failure = match &self {
            TranslationServiceError::Invalid(msg) => return AppError::BadRequest(msg.clone()),
            TranslationServiceError::Translation(e) | TranslationServiceError::Synthesis(e)
                if e.is_timeout() =>
            {
                UpstreamFailure::Timeout
            }
            TranslationServiceError::Translation(_) => UpstreamFailure::Translation,
            TranslationServiceError::Synthesis(_) => UpstreamFailure::Synthesis,
        };

        AppError::Upstream {
            failure,
            detail: self.to_string(),
            expose_detail,
        }
    }
}
