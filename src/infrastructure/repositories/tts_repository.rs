use super::error::UpstreamError;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (ElevenLabs today).
///
/// Implementations are responsible for:
/// - Picking a provider voice for the requested language
/// - Provider-specific model and voice settings
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech in the voice matching `language`
    ///
    /// Returns the raw audio body as sent by the provider (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The translated text to speak
    /// * `language` - Free-form language name as requested by the caller ("Tagalog", "Russian", ...)
    ///
    /// # Errors
    /// Returns error on transport failure, timeout, or any non-2xx response
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, UpstreamError>;
}
