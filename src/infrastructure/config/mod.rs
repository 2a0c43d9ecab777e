use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::domain::translation::VoiceIds;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub translate_path: String,
    // OpenAI
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub openai_model: String,
    // ElevenLabs
    pub elevenlabs_api_key: String,
    pub elevenlabs_api_base: String,
    pub elevenlabs_model_id: String,
    pub voice_ids: VoiceIds,
    // Upstream calls
    pub upstream_timeout_secs: u64,
    pub expose_error_details: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let environment = match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        let expose_error_details = env::var("EXPOSE_ERROR_DETAILS")
            .map(|s| s.to_lowercase() == "true")
            .unwrap_or(environment == Environment::Development);

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            environment,
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            translate_path: env::var("TRANSLATE_PATH")
                .unwrap_or_else(|_| "/api/translate".to_string()),
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            elevenlabs_api_key: required("ELEVENLABS_API_KEY")?,
            elevenlabs_api_base: env::var("ELEVENLABS_API_BASE")
                .unwrap_or_else(|_| "https://api.elevenlabs.io/v1".to_string()),
            elevenlabs_model_id: env::var("ELEVENLABS_MODEL_ID")
                .unwrap_or_else(|_| "eleven_multilingual_v2".to_string()),
            voice_ids: VoiceIds {
                english: required("VOICE_ID_ENGLISH")?,
                tagalog: required("VOICE_ID_TAGALOG")?,
                russian: required("VOICE_ID_RUSSIAN")?,
            },
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            expose_error_details,
        };

        if !config.translate_path.starts_with('/') {
            anyhow::bail!("TRANSLATE_PATH must start with '/'");
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

/// Debug output omits the API keys.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("log_format", &self.log_format)
            .field("translate_path", &self.translate_path)
            .field("openai_api_base", &self.openai_api_base)
            .field("openai_model", &self.openai_model)
            .field("elevenlabs_api_base", &self.elevenlabs_api_base)
            .field("elevenlabs_model_id", &self.elevenlabs_model_id)
            .field("voice_ids", &self.voice_ids)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("expose_error_details", &self.expose_error_details)
            .finish_non_exhaustive()
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    let value = env::var(name).with_context(|| format!("{} must be set", name))?;
    if value.trim().is_empty() {
        anyhow::bail!("{} must not be empty", name);
    }
    Ok(value)
}
