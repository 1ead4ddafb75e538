use crate::chat::{ChatError, ChatGateway, SYSTEM_PROMPT, fallback_message, reply_text};
use crate::domain::chat::{ChatSession, ChatSessionError};

/// Outcome of one relay round-trip. The transcript text is always present;
/// a failed call carries its cause so the route can pick a status code.
#[derive(Debug)]
pub struct ChatReply {
    pub text: String,
    pub error: Option<ChatError>,
}

/// Relays one user message through the gateway.
///
/// The session moves to `Sending` for the duration of the call and returns
/// to `Idle` whatever happens; a failure appends the mapped fallback string
/// to the transcript instead of a reply. No history is forwarded, each call
/// is single-turn.
pub async fn send_message<G>(
    session: &mut ChatSession,
    gateway: &G,
    text: &str,
) -> Result<ChatReply, ChatSessionError>
where
    G: ChatGateway,
{
    session.begin_send(text)?;

    let reply = match gateway.complete(SYSTEM_PROMPT, text).await {
        Ok(response) => ChatReply {
            text: reply_text(response),
            error: None,
        },
        Err(e) => {
            log::error!("Chat relay failed: {e}");
            ChatReply {
                text: fallback_message(&e).to_string(),
                error: Some(e),
            }
        }
    };

    session.finish(reply.text.clone());
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::CompletionResponse;
    use crate::domain::chat::{Sender, SessionState};

    /// Gateway double returning a canned outcome.
    struct StubGateway {
        outcome: fn() -> Result<CompletionResponse, ChatError>,
    }

    impl ChatGateway for StubGateway {
        async fn complete(
            &self,
            _system: &str,
            _user: &str,
        ) -> Result<CompletionResponse, ChatError> {
            (self.outcome)()
        }
    }

    #[actix_web::test]
    async fn rate_limit_maps_to_fixed_fallback_and_returns_to_idle() {
        let gateway = StubGateway {
            outcome: || Err(ChatError::RateLimited),
        };
        let mut session = ChatSession::new();

        let reply = send_message(&mut session, &gateway, "What is Betelgeuse?")
            .await
            .unwrap();

        assert_eq!(reply.text, "Rate limit exceeded. Please try again in a moment.");
        assert_eq!(session.state(), SessionState::Idle);
        let last = session.transcript().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, reply.text);
    }

    #[actix_web::test]
    async fn empty_choices_yield_pondering_fallback() {
        let gateway = StubGateway {
            outcome: || Ok(serde_json::from_str(r#"{"choices":[]}"#).unwrap()),
        };
        let mut session = ChatSession::new();

        let reply = send_message(&mut session, &gateway, "Hello?").await.unwrap();

        assert_eq!(reply.text, "I'm pondering the cosmos... please ask again.");
        assert!(reply.error.is_none());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[actix_web::test]
    async fn successful_reply_lands_in_the_transcript() {
        let gateway = StubGateway {
            outcome: || {
                Ok(serde_json::from_str(
                    r#"{"choices":[{"message":{"content":"A red supergiant in Orion."}}]}"#,
                )
                .unwrap())
            },
        };
        let mut session = ChatSession::new();

        let reply = send_message(&mut session, &gateway, "What is Betelgeuse?")
            .await
            .unwrap();

        assert_eq!(reply.text, "A red supergiant in Orion.");
        // greeting + user message + reply
        assert_eq!(session.transcript().len(), 3);
    }

    #[actix_web::test]
    async fn blank_message_is_rejected_before_the_gateway() {
        let gateway = StubGateway {
            outcome: || panic!("gateway must not be called"),
        };
        let mut session = ChatSession::new();

        let err = send_message(&mut session, &gateway, "   ").await.unwrap_err();
        assert_eq!(err, ChatSessionError::EmptyMessage);
        assert_eq!(session.state(), SessionState::Idle);
    }
}
