//! In-memory conversation state.
//!
//! A `Session` keeps two parallel logs of the same conversation: the
//! role-tagged transcript that is fed back to the model as context
//! and a display log used by the history view. Both only ever grow by
//! whole user/assistant exchanges and are cleared together.

use serde::Serialize;

use crate::openai::{Message, Role};

/// Number of transcript messages sent to the model as context.
pub const CONTEXT_WINDOW: usize = 10;

/// Wall-clock time in the format shown next to each message,
/// e.g. `03:07 PM`.
pub fn timestamp() -> String {
    chrono::Local::now().format("%I:%M %p").to_string()
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub speaker: Speaker,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Default)]
pub struct Session {
    transcript: Vec<TranscriptEntry>,
    log: Vec<LogEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one user message and the assistant's reply to both the
    /// transcript and the display log, user first.
    pub fn record_exchange(&mut self, user: &str, assistant: &str, timestamp: &str) {
        self.transcript.push(TranscriptEntry {
            role: Role::User,
            content: user.to_string(),
            timestamp: timestamp.to_string(),
        });
        self.transcript.push(TranscriptEntry {
            role: Role::Assistant,
            content: assistant.to_string(),
            timestamp: timestamp.to_string(),
        });
        self.log.push(LogEntry {
            speaker: Speaker::User,
            message: user.to_string(),
            time: timestamp.to_string(),
        });
        self.log.push(LogEntry {
            speaker: Speaker::Bot,
            message: assistant.to_string(),
            time: timestamp.to_string(),
        });
    }

    /// The last `CONTEXT_WINDOW` messages of the transcript with
    /// `pending` appended, i.e. what the transcript will look like once
    /// the pending user message is recorded.
    pub fn context(&self, pending: &Message) -> Vec<Message> {
        let stored = self
            .transcript
            .iter()
            .map(|entry| Message::new(entry.role.clone(), &entry.content));
        let mut messages: Vec<Message> = stored.chain([pending.clone()]).collect();
        let start = messages.len().saturating_sub(CONTEXT_WINDOW);
        messages.drain(..start);
        messages
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn history(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn reset(&mut self) {
        self.transcript.clear();
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_records_exchanges_in_lockstep() {
        let mut session = Session::new();
        session.record_exchange("hi", "hello", "10:00 AM");

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.transcript()[0].role, Role::User);
        assert_eq!(session.transcript()[1].role, Role::Assistant);
        assert_eq!(session.history()[0].speaker, Speaker::User);
        assert_eq!(session.history()[1].speaker, Speaker::Bot);
        assert_eq!(session.history()[1].message, "hello");
        assert_eq!(session.history()[1].time, "10:00 AM");
    }

    #[test]
    fn it_windows_the_context() {
        let mut session = Session::new();
        for i in 0..20 {
            session.record_exchange(&format!("q{i}"), &format!("a{i}"), "10:00 AM");
        }

        let pending = Message::new(Role::User, "latest");
        let context = session.context(&pending);

        assert_eq!(context.len(), CONTEXT_WINDOW);
        assert_eq!(context.last(), Some(&pending));
        assert_eq!(context[0], Message::new(Role::Assistant, "a15"));
        // Storage is never truncated
        assert_eq!(session.transcript().len(), 40);
    }

    #[test]
    fn it_includes_the_whole_short_transcript() {
        let mut session = Session::new();
        session.record_exchange("hi", "hello", "10:00 AM");

        let context = session.context(&Message::new(Role::User, "how are you"));

        assert_eq!(
            context,
            vec![
                Message::new(Role::User, "hi"),
                Message::new(Role::Assistant, "hello"),
                Message::new(Role::User, "how are you"),
            ]
        );
    }

    #[test]
    fn it_resets_both_logs() {
        let mut session = Session::new();
        session.record_exchange("hi", "hello", "10:00 AM");
        session.reset();

        assert!(session.transcript().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn it_serializes_log_entries_for_display() {
        let entry = LogEntry {
            speaker: Speaker::Bot,
            message: String::from("hello"),
            time: String::from("10:00 AM"),
        };
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            serde_json::json!({"type": "bot", "message": "hello", "time": "10:00 AM"})
        );
    }
}
