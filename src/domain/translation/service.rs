use super::dto::TranslationRequest;
use super::error::TranslationServiceError;
use super::voice::VoiceLanguage;
use crate::infrastructure::repositories::{TranslationRepository, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SpokenTranslation {
    pub translated_text: String,
    pub audio_data: Vec<u8>,
    /// Voice family the audio was spoken in, derived from the requested language
    pub voice_language: VoiceLanguage,
}

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
}

impl TranslationService {
    pub fn new(
        translation_repo: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
    ) -> Self {
        Self {
            translation_repo,
            tts_repo,
        }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text and speak the translation
    ///
    /// This operation:
    /// - Translates the text with the language model
    /// - Synthesizes the translation in the voice for the requested language
    ///
    /// Synthesis is only attempted once translation has succeeded.
    async fn translate_and_speak(
        &self,
        request: TranslationRequest,
    ) -> Result<SpokenTranslation, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate_and_speak(
        &self,
        request: TranslationRequest,
    ) -> Result<SpokenTranslation, TranslationServiceError> {
        tracing::info!(
            target_language = %request.target_language,
            text_length = request.text.len(),
            "Translation request"
        );

        // 1. Translate
        let translated_text = self
            .translation_repo
            .translate(&request.text, &request.target_language)
            .await
            .map_err(TranslationServiceError::Translation)?;

        // 2. Voice follows the requested language, not the model's output
        let voice_language = VoiceLanguage::from_name(&request.target_language);
        tracing::info!(
            target_language = %request.target_language,
            voice_language = %voice_language,
            translated_length = translated_text.len(),
            "Translation received, synthesizing speech"
        );

        // 3. Synthesize
        let audio_data = self
            .tts_repo
            .synthesize(&translated_text, &request.target_language)
            .await
            .map_err(TranslationServiceError::Synthesis)?;

        Ok(SpokenTranslation {
            translated_text,
            audio_data,
            voice_language,
        })
    }
}
