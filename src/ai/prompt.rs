//! Reusable prompts using Handlebars for templating. Strict mode makes
//! a missing variable a render error instead of an empty string.

use std::fmt;

use handlebars::Handlebars;
use serde::Serialize;

#[derive(Debug)]
pub enum Prompt {
    VoiceAssistant,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

const VOICE_ASSISTANT_PROMPT: &str = r"You are Riverwood AI, a friendly voice assistant for a construction project.
Respond in {{language}}.
Keep responses brief (2-3 sentences), conversational, and helpful.
Use casual greetings like 'Namaste' or 'Hello' based on language preference.
Reference previous conversation when relevant.";

#[derive(Serialize)]
pub struct VoiceAssistantContext<'a> {
    pub language: &'a str,
}

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::VoiceAssistant.to_string(), VOICE_ASSISTANT_PROMPT)
        .expect("Failed to register template");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_renders_the_voice_assistant_prompt() {
        let prompt = templates()
            .render(
                &Prompt::VoiceAssistant.to_string(),
                &VoiceAssistantContext {
                    language: "Hindi mixed with English",
                },
            )
            .unwrap();
        assert!(prompt.starts_with("You are Riverwood AI"));
        assert!(prompt.contains("Respond in Hindi mixed with English."));
    }

    #[test]
    fn it_fails_on_missing_variables() {
        let result = templates().render(&Prompt::VoiceAssistant.to_string(), &serde_json::json!({}));
        assert!(result.is_err());
    }
}
