//! Builds the model context for a chat turn and gets the reply.

use anyhow::Result;

use super::prompt::{Prompt, VoiceAssistantContext, templates};
use crate::core::AppConfig;
use crate::openai::{CompletionError, CompletionParams, Message, Role, chat};
use crate::session::Session;
use crate::updates::UpdateNotifier;

/// Reply language requested by the browser. Anything other than
/// exactly "hindi" is answered in English.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        if value == "hindi" {
            Language::Hindi
        } else {
            Language::English
        }
    }
}

impl Language {
    fn instruction(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi mixed with English",
        }
    }
}

pub fn system_prompt(language: Language) -> Result<String> {
    let prompt = templates().render(
        &Prompt::VoiceAssistant.to_string(),
        &VoiceAssistantContext {
            language: language.instruction(),
        },
    )?;
    Ok(prompt)
}

/// What it takes to answer a user message.
#[derive(Debug, PartialEq)]
pub enum Turn {
    /// Answered from the canned construction updates
    Update(String),
    /// Needs a completion over these messages
    Completion(Vec<Message>),
}

/// Decides how to answer `message`. Update requests are answered
/// immediately and advance the update cursor, everything else gets
/// the system prompt plus the windowed transcript. Nothing is
/// recorded in the session, see `Session::record_exchange`.
pub fn prepare_turn(
    session: &Session,
    updates: &mut UpdateNotifier,
    message: &str,
    language: Language,
) -> Result<Turn> {
    if let Some(update) = updates.check(message) {
        return Ok(Turn::Update(update));
    }

    let pending = Message::new(Role::User, message);
    let mut messages = vec![Message::new(Role::System, &system_prompt(language)?)];
    messages.extend(session.context(&pending));
    Ok(Turn::Completion(messages))
}

/// Sends composed turns to the completion API.
#[derive(Clone, Debug)]
pub struct Composer {
    api_hostname: String,
    api_key: String,
    params: CompletionParams,
}

impl Composer {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            params: CompletionParams::new(model),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.openai_api_hostname,
            &config.openai_api_key,
            &config.openai_model,
        )
    }

    /// Returns the assistant's reply text for `turn`.
    pub async fn respond(&self, turn: Turn) -> Result<String, CompletionError> {
        match turn {
            Turn::Update(update) => Ok(update),
            Turn::Completion(messages) => {
                tracing::debug!("Requesting completion with {} messages", messages.len());
                let reply = chat(&messages, &self.params, &self.api_hostname, &self.api_key).await?;
                Ok(reply.content)
            }
        }
    }
}
