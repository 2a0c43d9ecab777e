use serde::{Deserialize, Serialize};

use super::error::TranslationServiceError;

pub const DEFAULT_TARGET_LANGUAGE: &str = "English";
pub const NO_TEXT_MESSAGE: &str = "No text provided.";

/// Body of POST {translate_path}
///
/// Both fields are optional at the wire level so that a missing `text`
/// is reported as a validation error rather than a decoding error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

/// Success body of POST {translate_path}
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub audio_base64: String,
}

/// A validated translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

impl TryFrom<TranslateRequest> for TranslationRequest {
    type Error = TranslationServiceError;

    fn try_from(request: TranslateRequest) -> Result<Self, Self::Error> {
        let text = request
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| TranslationServiceError::Invalid(NO_TEXT_MESSAGE.to_string()))?;

        let target_language = request
            .target_language
            .map(|language| language.trim().to_string())
            .filter(|language| !language.is_empty())
            .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string());

        Ok(Self {
            text,
            target_language,
        })
    }
}
