use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

use crate::{
    domain::translation::{
        TranslateRequest, TranslateResponse, TranslationRequest, TranslationService,
        TranslationServiceApi,
    },
    error::{AppError, AppResult},
};

pub const X_VOICE_LANGUAGE: &str = "x-voice-language";

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
    expose_error_details: bool,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>, expose_error_details: bool) -> Self {
        Self {
            translation_service,
            expose_error_details,
        }
    }

    /// POST {translate_path} - Translate text and return it with spoken audio
    ///
    /// The body is decoded as JSON whatever its Content-Type says.
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        body: Bytes,
    ) -> AppResult<(HeaderMap, Json<TranslateResponse>)> {
        let payload: TranslateRequest = serde_json::from_slice(&body)?;

        // Validate input before any upstream call
        let request = TranslationRequest::try_from(payload)
            .map_err(|e| e.into_app_error(controller.expose_error_details))?;

        let result = controller
            .translation_service
            .translate_and_speak(request)
            .await
            .map_err(|e| e.into_app_error(controller.expose_error_details))?;

        let audio_base64 = STANDARD.encode(&result.audio_data);

        tracing::info!(
            translated_length = result.translated_text.len(),
            audio_size_bytes = result.audio_data.len(),
            voice_language = %result.voice_language,
            "Translation served"
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            X_VOICE_LANGUAGE,
            HeaderValue::from_static(result.voice_language.as_str()),
        );

        Ok((
            headers,
            Json(TranslateResponse {
                translated_text: result.translated_text,
                audio_base64,
            }),
        ))
    }

    /// Any other method on the translate path
    pub async fn method_not_allowed() -> AppError {
        AppError::MethodNotAllowed
    }
}
