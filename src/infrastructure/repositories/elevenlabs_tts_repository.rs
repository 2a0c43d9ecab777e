use super::error::UpstreamError;
use super::tts_repository::TtsRepository;
use crate::domain::translation::VoiceIds;
use async_trait::async_trait;
use reqwest::header;
use serde::Serialize;
use std::time::Duration;

const STABILITY: f32 = 0.7;
const SIMILARITY_BOOST: f32 = 0.9;

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    http_client: reqwest::Client,
    api_base: String,
    api_key: String,
    model_id: String,
    voice_ids: VoiceIds,
    timeout: Duration,
}

impl ElevenLabsTtsRepository {
    pub fn new(
        api_base: String,
        api_key: String,
        model_id: String,
        voice_ids: VoiceIds,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model_id,
            voice_ids,
            timeout,
        })
    }

    fn speech_url(&self, voice_id: &str) -> String {
        format!("{}/text-to-speech/{}", self.api_base, voice_id)
    }

    /// Call the ElevenLabs text-to-speech endpoint for a single voice
    async fn call_elevenlabs(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, UpstreamError> {
        let body = SpeechRequest {
            text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings {
                stability: STABILITY,
                similarity_boost: SIMILARITY_BOOST,
            },
        };

        let response = self
            .http_client
            .post(self.speech_url(voice_id))
            .header("xi-api-key", &self.api_key)
            .header(header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                voice_id = voice_id,
                error_body = %message,
                "ElevenLabs TTS API call failed"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, self.timeout))?;

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, UpstreamError> {
        let start_time = std::time::Instant::now();
        let voice = self.voice_ids.resolve(language);

        tracing::info!(
            requested_language = language,
            voice_language = %voice.language,
            voice_id = %voice.voice_id,
            model_id = %self.model_id,
            text_length = text.len(),
            "Starting ElevenLabs TTS synthesis"
        );

        let audio_data = self.call_elevenlabs(text, &voice.voice_id).await?;

        tracing::info!(
            provider = "elevenlabs",
            model_id = %self.model_id,
            voice_id = %voice.voice_id,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
