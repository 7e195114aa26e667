use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_model: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub elevenlabs_api_hostname: String,
    pub elevenlabs_api_key: String,
    pub elevenlabs_voice_id: String,
    pub elevenlabs_model: String,
}

impl AppConfig {
    /// Names of provider credentials that are missing from the
    /// environment. Requests to those providers will fail upstream.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openai_api_key.is_empty() {
            missing.push("OPENAI_API_KEY");
        }
        if self.elevenlabs_api_key.is_empty() {
            missing.push("ELEVENLABS_API_KEY");
        }
        missing
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("RIVERWOOD_OPENAI_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let openai_model =
            env::var("RIVERWOOD_OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let elevenlabs_api_hostname = env::var("RIVERWOOD_ELEVENLABS_HOST")
            .unwrap_or_else(|_| "https://api.elevenlabs.io".to_string());
        let elevenlabs_api_key = env::var("ELEVENLABS_API_KEY").unwrap_or_default();
        // Rachel
        let elevenlabs_voice_id =
            env::var("RIVERWOOD_VOICE_ID").unwrap_or_else(|_| "21m00Tcm4TlvDq8ikWAM".to_string());
        let elevenlabs_model = env::var("RIVERWOOD_TTS_MODEL")
            .unwrap_or_else(|_| "eleven_multilingual_v2".to_string());

        Self {
            openai_model,
            openai_api_hostname,
            openai_api_key,
            elevenlabs_api_hostname,
            elevenlabs_api_key,
            elevenlabs_voice_id,
            elevenlabs_model,
        }
    }
}
