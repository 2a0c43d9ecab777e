use super::error::UpstreamError;
use super::translation_repository::TranslationRepository;
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Low temperature keeps translations literal and repeatable
const TEMPERATURE: f32 = 0.3;

/// OpenAI chat-completions implementation of the translation repository
pub struct OpenAiTranslationRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    timeout: Duration,
}

impl OpenAiTranslationRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, timeout: Duration) -> Self {
        Self {
            client,
            model,
            timeout,
        }
    }

    fn build_prompt(text: &str, target_language: &str) -> String {
        format!(
            "Translate this to {} in a simple, clear, and natural way:\n\n{}",
            target_language, text
        )
    }

    fn map_openai_error(err: OpenAIError) -> UpstreamError {
        match err {
            OpenAIError::ApiError(api_error) => UpstreamError::Api(api_error.message),
            OpenAIError::Reqwest(e) => UpstreamError::Transport(e.to_string()),
            // The SDK drops the HTTP status when an error body is not JSON (gateway 5xx pages)
            OpenAIError::JSONDeserialize(e) => {
                tracing::warn!(error = %e, "OpenAI response body was not a completion or an API error");
                UpstreamError::Malformed(format!(
                    "response is neither a chat completion nor an API error ({})",
                    e
                ))
            }
            other => UpstreamError::Api(other.to_string()),
        }
    }
}

#[async_trait]
impl TranslationRepository for OpenAiTranslationRepository {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, UpstreamError> {
        let start_time = std::time::Instant::now();

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(Self::build_prompt(text, target_language))
            .build()
            .map_err(|e| UpstreamError::Malformed(format!("invalid request: {}", e)))?;
        let messages: Vec<ChatCompletionRequestMessage> = vec![message.into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .temperature(TEMPERATURE)
            .build()
            .map_err(|e| UpstreamError::Malformed(format!("invalid request: {}", e)))?;

        tracing::info!(
            model = %self.model,
            target_language = target_language,
            text_length = text.len(),
            "Calling OpenAI chat completions"
        );

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout))?
            .map_err(Self::map_openai_error)
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    target_language = target_language,
                    "OpenAI translation call failed"
                );
                e
            })?;

        let translated = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| UpstreamError::Malformed("completion has no content".to_string()))?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            translated_length = translated.len(),
            "Translation completed"
        );

        Ok(translated)
    }
}
