use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Greeting seeded into every new transcript.
pub const GREETING: &str = "Namaste! I am Gurudev, your cosmic guide. Ask me about stars, \
    planets, galaxies, or any celestial wonder!";

/// Which side of the conversation authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the append-only transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Whether a relay round-trip is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Sending,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatSessionError {
    /// A send was attempted while a previous one had not completed.
    #[error("a message is already in flight")]
    SendInProgress,
    /// The outgoing message was empty after trimming.
    #[error("message cannot be empty")]
    EmptyMessage,
}

/// Conversation state for the chat widget.
///
/// The transcript is append-only and lives for the session; the relay itself
/// is stateless per call and no history is forwarded on subsequent turns.
/// Exactly one request may be in flight: `begin_send` moves the session to
/// `Sending` and `finish` returns it to `Idle` whatever the outcome was.
#[derive(Debug, Clone)]
pub struct ChatSession {
    state: SessionState,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    /// Creates a session seeded with the Gurudev greeting.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            transcript: vec![ChatMessage {
                sender: Sender::Bot,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Records the outgoing user message and marks the session busy.
    pub fn begin_send(&mut self, text: &str) -> Result<(), ChatSessionError> {
        if self.state == SessionState::Sending {
            return Err(ChatSessionError::SendInProgress);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatSessionError::EmptyMessage);
        }
        self.transcript.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
        });
        self.state = SessionState::Sending;
        Ok(())
    }

    /// Records the bot reply (or a fallback) and returns the session to idle.
    pub fn finish(&mut self, reply: String) {
        self.transcript.push(ChatMessage {
            sender: Sender::Bot,
            text: reply,
        });
        self.state = SessionState::Idle;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_idle_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].sender, Sender::Bot);
    }

    #[test]
    fn rejects_concurrent_sends() {
        let mut session = ChatSession::new();
        session.begin_send("What is Betelgeuse?").unwrap();
        assert_eq!(session.state(), SessionState::Sending);
        assert_eq!(
            session.begin_send("And Rigel?").unwrap_err(),
            ChatSessionError::SendInProgress
        );
    }

    #[test]
    fn rejects_blank_messages() {
        let mut session = ChatSession::new();
        assert_eq!(
            session.begin_send("   ").unwrap_err(),
            ChatSessionError::EmptyMessage
        );
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn finish_returns_to_idle_and_appends_reply() {
        let mut session = ChatSession::new();
        session.begin_send("What is Betelgeuse?").unwrap();
        session.finish("A red supergiant in Orion.".to_string());
        assert_eq!(session.state(), SessionState::Idle);
        let last = session.transcript().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "A red supergiant in Orion.");
    }
}
