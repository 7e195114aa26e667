//! Text-to-speech using the ElevenLabs streaming API

use std::time::Duration;

use futures_util::StreamExt;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::core::AppConfig;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("speech API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    pub style: f64,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.5,
            use_speaker_boost: true,
        }
    }
}

/// Synthesizes speech from text with a fixed voice
#[derive(Clone, Debug)]
pub struct TextToSpeech {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    voice_id: String,
    model: String,
    settings: VoiceSettings,
}

impl TextToSpeech {
    pub fn new(api_hostname: &str, api_key: &str, voice_id: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.trim_end_matches("/").to_string(),
            api_key: api_key.to_string(),
            voice_id: voice_id.to_string(),
            model: model.to_string(),
            settings: VoiceSettings::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.elevenlabs_api_hostname,
            &config.elevenlabs_api_key,
            &config.elevenlabs_voice_id,
            &config.elevenlabs_model,
        )
    }

    /// Synthesize `text` and return the MP3 audio. The provider streams
    /// the audio in chunks which are buffered into one response.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        #[derive(Serialize)]
        struct SpeechRequest<'a> {
            text: &'a str,
            model_id: &'a str,
            voice_settings: &'a VoiceSettings,
        }

        let url = format!(
            "{}/v1/text-to-speech/{}/stream",
            self.api_hostname, self.voice_id
        );
        let request = SpeechRequest {
            text,
            model_id: &self.model,
            voice_settings: &self.settings,
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .timeout(Duration::from_secs(60 * 10))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Status { status, body });
        }

        let mut audio = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            audio.extend_from_slice(&chunk?);
        }
        tracing::debug!("Synthesized {} bytes of audio", audio.len());

        Ok(audio)
    }
}
