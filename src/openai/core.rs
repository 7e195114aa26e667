use std::time::Duration;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Sampling parameters sent with every completion request.
#[derive(Clone, Debug)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl CompletionParams {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            max_tokens: 150,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("no message received. Resp: {0}")]
    MissingContent(Value),
}

pub async fn completion(
    messages: &[Message],
    params: &CompletionParams,
    api_hostname: &str,
    api_key: &str,
) -> Result<Value, CompletionError> {
    let payload = json!({
        "model": params.model,
        "messages": messages,
        "max_tokens": params.max_tokens,
        "temperature": params.temperature,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CompletionError::Status { status, body });
    }

    Ok(response.json().await?)
}

/// Runs a single completion over `messages` and returns the
/// assistant's reply. There are no tools so the first choice is
/// always the final answer.
pub async fn chat(
    messages: &[Message],
    params: &CompletionParams,
    api_hostname: &str,
    api_key: &str,
) -> Result<Message, CompletionError> {
    let resp = completion(messages, params, api_hostname, api_key).await?;

    match resp["choices"][0]["message"]["content"].as_str() {
        Some(msg) => Ok(Message::new(Role::Assistant, msg)),
        None => Err(CompletionError::MissingContent(resp)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const COMPLETION_RESPONSE: &str = r#"{
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "Hello! How can I help you today?"
            },
            "finish_reason": "stop"
        }]
    }"#;

    #[test]
    fn it_serializes_roles_lowercase() {
        let msg = Message::new(Role::Assistant, "hi");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "assistant", "content": "hi"})
        );
    }

    #[tokio::test]
    async fn test_chat_basic_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "max_tokens": 150,
                "temperature": 0.7,
                "messages": [{"role": "user", "content": "Hi"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(COMPLETION_RESPONSE)
            .create_async()
            .await;

        let messages = vec![Message::new(Role::User, "Hi")];
        let params = CompletionParams::new("gpt-4o-mini");
        let reply = chat(&messages, &params, &server.url(), "test-key")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Hello! How can I help you today?");
    }

    #[tokio::test]
    async fn test_chat_trims_trailing_slash() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(COMPLETION_RESPONSE)
            .create_async()
            .await;

        let url = format!("{}/", server.url());
        let params = CompletionParams::new("gpt-4o-mini");
        let result = chat(&[], &params, &url, "test-key").await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_chat_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let params = CompletionParams::new("gpt-4o-mini");
        let err = chat(&[], &params, &server.url(), "test-key")
            .await
            .unwrap_err();

        match err {
            CompletionError::Status { status, body } => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, "rate limited");
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_chat_missing_content() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let params = CompletionParams::new("gpt-4o-mini");
        let err = chat(&[], &params, &server.url(), "test-key")
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::MissingContent(_)));
    }
}
