mod tts;
pub use tts::{SpeechError, TextToSpeech, VoiceSettings};
