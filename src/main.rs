use std::sync::Arc;
use async_openai::{config::OpenAIConfig, Client};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use translate_speak::controllers::translate::TranslateController;
use translate_speak::domain::translation::TranslationService;
use translate_speak::infrastructure::config::{Config, LogFormat};
use translate_speak::infrastructure::http::{create_router, start_http_server};
use translate_speak::infrastructure::repositories::{
    ElevenLabsTtsRepository, OpenAiTranslationRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting translate-speak on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        translate_path = %config.translate_path,
        openai_model = %config.openai_model,
        elevenlabs_model_id = %config.elevenlabs_model_id,
        upstream_timeout_secs = config.upstream_timeout_secs,
        expose_error_details = config.expose_error_details,
        "Configuration loaded"
    );

    if config.expose_error_details && !config.is_development() {
        tracing::warn!("EXPOSE_ERROR_DETAILS is enabled outside development; upstream error text will reach clients");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider clients
    tracing::info!("Instantiating provider clients...");
    let openai_client = Arc::new(Client::with_config(
        OpenAIConfig::new()
            .with_api_key(config.openai_api_key.as_str())
            .with_api_base(config.openai_api_base.as_str()),
    ));

    // 2. Instantiate repositories (inject clients and config)
    tracing::info!("Instantiating repositories...");
    let translation_repo = Arc::new(OpenAiTranslationRepository::new(
        openai_client,
        config.openai_model.clone(),
        config.upstream_timeout(),
    ));
    let tts_repo = Arc::new(ElevenLabsTtsRepository::new(
        config.elevenlabs_api_base.clone(),
        config.elevenlabs_api_key.clone(),
        config.elevenlabs_model_id.clone(),
        config.voice_ids.clone(),
        config.upstream_timeout(),
    )?);

    // 3. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(translation_repo, tts_repo));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let translate_controller = Arc::new(TranslateController::new(
        translation_service,
        config.expose_error_details,
    ));

    // Start HTTP server with all routes
    let app = create_router(config.clone(), translate_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "translate_speak=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "translate_speak=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
