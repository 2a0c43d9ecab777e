use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness only reflects local configuration; upstream providers are not probed.
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "translation": config.openai_model,
            "tts": config.elevenlabs_model_id
        })),
    )
}
