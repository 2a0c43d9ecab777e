use axum::Router;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use translate_speak::{
    controllers::translate::TranslateController,
    domain::translation::{TranslationService, VoiceIds},
    infrastructure::{
        config::{Config, Environment, LogFormat},
        http::create_router,
        repositories::{TranslationRepository, TtsRepository},
    },
};


use api_client::TestClient;
use stubs::{StubSynthesizer, StubTranslator};

pub const TRANSLATE_PATH: &str = "/api/translate";

/// Audio returned by the default synthesizer stub
pub const STUB_AUDIO: [u8; 2] = [0x00, 0x01];

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
    pub translator: Arc<StubTranslator>,
    pub synthesizer: Arc<StubSynthesizer>,
}

impl TestContext {
    /// Boot the app with the given stubs and the default test configuration
    pub async fn with_stubs(translator: StubTranslator, synthesizer: StubSynthesizer) -> Self {
        Self::with_config_and_stubs(test_config(), translator, synthesizer).await
    }

    pub async fn with_config_and_stubs(
        config: Config,
        translator: StubTranslator,
        synthesizer: StubSynthesizer,
    ) -> Self {
        let translator = Arc::new(translator);
        let synthesizer = Arc::new(synthesizer);

        let client = spawn_app(config.clone(), translator.clone(), synthesizer.clone()).await;

        Self {
            client,
            config,
            translator,
            synthesizer,
        }
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            Self::with_stubs(
                StubTranslator::replying("Hola"),
                StubSynthesizer::replying(STUB_AUDIO.to_vec()),
            )
            .await
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task ends with the test runtime
        }
    }
}

/// Test configuration. Upstream bases point nowhere; tests that talk HTTP
/// to fake providers override them.
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        translate_path: TRANSLATE_PATH.to_string(),
        openai_api_key: "test-openai-key".to_string(),
        openai_api_base: "http://127.0.0.1:9/v1".to_string(),
        openai_model: "gpt-4".to_string(),
        elevenlabs_api_key: "test-xi-key".to_string(),
        elevenlabs_api_base: "http://127.0.0.1:9/v1".to_string(),
        elevenlabs_model_id: "eleven_multilingual_v2".to_string(),
        voice_ids: VoiceIds {
            english: "voice-en".to_string(),
            tagalog: "voice-tl".to_string(),
            russian: "voice-ru".to_string(),
        },
        upstream_timeout_secs: 5,
        expose_error_details: true,
    }
}

/// Build the router the same way main does, serve it on an ephemeral port
/// and return a client for it
pub async fn spawn_app(
    config: Config,
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
) -> TestClient {
    let app = create_app(config, translation_repo, tts_repo);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestClient::new(&base_url)
}

fn create_app(
    config: Config,
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
) -> Router {
    let config = Arc::new(config);
    let translation_service = Arc::new(TranslationService::new(translation_repo, tts_repo));
    let translate_controller = Arc::new(TranslateController::new(
        translation_service,
        config.expose_error_details,
    ));

    create_router(config, translate_controller)
}
