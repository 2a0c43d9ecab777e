use crate::e2e::helpers;

use async_openai::{config::OpenAIConfig, Client};
use helpers::{api_client::TestClient, spawn_app, test_config, TRANSLATE_PATH};
use hyper::StatusCode;
use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use translate_speak::infrastructure::repositories::{
    ElevenLabsTtsRepository, OpenAiTranslationRepository,
};

/// Boot the app with the real provider repositories, both pointed at `server`
async fn spawn_with_providers(server: &ServerGuard) -> TestClient {
    let mut config = test_config();
    config.openai_api_base = server.url();
    config.elevenlabs_api_base = server.url();

    let openai_client = Arc::new(Client::with_config(
        OpenAIConfig::new()
            .with_api_key(config.openai_api_key.as_str())
            .with_api_base(config.openai_api_base.as_str()),
    ));
    let translation_repo = Arc::new(OpenAiTranslationRepository::new(
        openai_client,
        config.openai_model.clone(),
        config.upstream_timeout(),
    ));
    let tts_repo = Arc::new(
        ElevenLabsTtsRepository::new(
            config.elevenlabs_api_base.clone(),
            config.elevenlabs_api_key.clone(),
            config.elevenlabs_model_id.clone(),
            config.voice_ids.clone(),
            config.upstream_timeout(),
        )
        .unwrap(),
    );

    spawn_app(config, translation_repo, tts_repo).await
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-e2e",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": { "prompt_tokens": 25, "completion_tokens": 4, "total_tokens": 29 }
    })
    .to_string()
}

#[tokio::test]
async fn it_should_translate_and_speak_through_both_providers() {
    let mut server = Server::new_async().await;

    let openai = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-openai-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({ "model": "gpt-4", "temperature": 0.3 })),
            Matcher::Regex("Translate this to Tagalog".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Magandang umaga\n"))
        .expect(1)
        .create_async()
        .await;

    let elevenlabs = server
        .mock("POST", "/text-to-speech/voice-tl")
        .match_header("xi-api-key", "test-xi-key")
        .match_body(Matcher::PartialJson(json!({
            "text": "Magandang umaga",
            "model_id": "eleven_multilingual_v2",
            "voice_settings": { "stability": 0.7, "similarity_boost": 0.9 }
        })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(vec![0x00, 0x01])
        .expect(1)
        .create_async()
        .await;

    let client = spawn_with_providers(&server).await;
    let response = client
        .post(
            TRANSLATE_PATH,
            &json!({ "text": "Good morning", "target_language": "Tagalog" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body,
        Some(json!({ "translated_text": "Magandang umaga", "audio_base64": "AAE=" }))
    );
    openai.assert_async().await;
    elevenlabs.assert_async().await;
}

#[tokio::test]
async fn it_should_not_call_tts_when_the_language_model_fails() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let elevenlabs = server
        .mock("POST", Matcher::Regex("^/text-to-speech/".to_string()))
        .expect(0)
        .create_async()
        .await;

    let client = spawn_with_providers(&server).await;
    let response = client
        .post(TRANSLATE_PATH, &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_code("translation_failed")
        .assert_error_message("Incorrect API key provided");
    elevenlabs.assert_async().await;
}

#[tokio::test]
async fn it_should_surface_tts_rejection_as_synthesis_failure() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Hola"))
        .create_async()
        .await;

    server
        .mock("POST", "/text-to-speech/voice-en")
        .with_status(429)
        .with_body(r#"{"detail":{"status":"quota_exceeded"}}"#)
        .create_async()
        .await;

    let client = spawn_with_providers(&server).await;
    let response = client
        .post(
            TRANSLATE_PATH,
            &json!({ "text": "Hello", "target_language": "Spanish" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_code("synthesis_failed")
        .assert_error_message("quota_exceeded");
}
