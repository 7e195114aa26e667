//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use serde_json::Value;

use riverwood::api::AppState;
use riverwood::api::app;
use riverwood::core::AppConfig;

pub const OPENAI_KEY: &str = "test-openai-key";
pub const ELEVENLABS_KEY: &str = "test-elevenlabs-key";
pub const VOICE_ID: &str = "test-voice";

/// Config pointing both providers at `openai_url` and
/// `elevenlabs_url`, usually `mockito` servers.
pub fn test_config(openai_url: &str, elevenlabs_url: &str) -> AppConfig {
    AppConfig {
        openai_model: String::from("gpt-4o-mini"),
        openai_api_hostname: openai_url.to_string(),
        openai_api_key: String::from(OPENAI_KEY),
        elevenlabs_api_hostname: elevenlabs_url.to_string(),
        elevenlabs_api_key: String::from(ELEVENLABS_KEY),
        elevenlabs_voice_id: String::from(VOICE_ID),
        elevenlabs_model: String::from("eleven_multilingual_v2"),
    }
}

/// Creates a test application router with a fresh session. Providers
/// point at a closed port unless a `mockito` url is passed in.
pub fn test_app() -> Router {
    test_app_with_providers("http://127.0.0.1:1", "http://127.0.0.1:1")
}

pub fn test_app_with_providers(openai_url: &str, elevenlabs_url: &str) -> Router {
    let app_state = AppState::new(test_config(openai_url, elevenlabs_url));
    app(Arc::new(RwLock::new(app_state)))
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub async fn body_to_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

pub async fn body_to_string(body: Body) -> String {
    String::from_utf8(body_to_bytes(body).await).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_slice(&body_to_bytes(body).await).expect("Body is not json")
}
