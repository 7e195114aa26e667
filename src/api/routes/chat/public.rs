//! Public types for the chat API
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    String::from("english")
}

#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    // "english" or "hindi"
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.into(),
        }
    }
}
