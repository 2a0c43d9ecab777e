use super::error::UpstreamError;
use async_trait::async_trait;

/// Repository for text translation.
/// Abstracts the language-model provider used to translate.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` into `target_language`
    ///
    /// Returns the trimmed, non-empty translation.
    ///
    /// # Errors
    /// Returns error if the provider call fails or the completion is missing or empty
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, UpstreamError>;
}
