//! Relay from the chat widget to the hosted LLM gateway.
//!
//! Each call is single-turn: the fixed system prompt plus one user message,
//! no transcript history. Failures map to fixed conversational fallback
//! strings through [`fallback_message`]; nothing here retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::config::ChatConfig;

/// Persona and scope instruction sent with every completion request.
/// Scope steering is prompt-level only, not enforced in code.
pub const SYSTEM_PROMPT: &str = "You are Gurudev, a wise and friendly cosmic guide for the \
    Brahmand astronomy app. You answer questions about stars, planets, galaxies, black holes, \
    and all celestial wonders with warmth and clarity. Keep answers concise and engaging. If a \
    question is not about astronomy or space, gently steer the conversation back to the cosmos.";

/// Substituted when the gateway responds successfully but with no choices.
pub const PONDERING_FALLBACK: &str = "I'm pondering the cosmos... please ask again.";

const RATE_LIMIT_FALLBACK: &str = "Rate limit exceeded. Please try again in a moment.";
const UNAVAILABLE_FALLBACK: &str = "Service temporarily unavailable. Please try again later.";
const DISRUPTED_FALLBACK: &str =
    "Apologies, the cosmic connection is disrupted. Please try again in a moment.";

#[derive(Debug, Error)]
pub enum ChatError {
    /// No gateway credential is configured.
    #[error("chat gateway credential is not configured")]
    MissingCredential,
    /// Gateway returned 429.
    #[error("chat gateway rate limit exceeded")]
    RateLimited,
    /// Gateway returned 402.
    #[error("chat gateway credits exhausted")]
    CreditsExhausted,
    /// Any other non-2xx status; the body is kept for the log.
    #[error("chat gateway returned status {status}")]
    Upstream { status: u16, body: String },
    #[error("chat gateway transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// User-facing transcript text for a failed relay call.
pub fn fallback_message(error: &ChatError) -> &'static str {
    match error {
        ChatError::RateLimited => RATE_LIMIT_FALLBACK,
        ChatError::CreditsExhausted => UNAVAILABLE_FALLBACK,
        ChatError::MissingCredential | ChatError::Upstream { .. } | ChatError::Transport(_) => {
            DISRUPTED_FALLBACK
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<GatewayMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct GatewayMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// OpenAI-style completion response.
#[derive(Debug, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}

/// Extracts the reply text, substituting the fixed fallback when the
/// gateway returned no choices or an empty message.
pub fn reply_text(response: CompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .unwrap_or_else(|| PONDERING_FALLBACK.to_string())
}

/// One completion round-trip against the gateway.
pub trait ChatGateway {
    fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> impl Future<Output = Result<CompletionResponse, ChatError>> + Send;
}

/// Gateway client speaking the OpenAI-style chat-completions protocol over
/// HTTPS with a bearer credential.
#[derive(Clone)]
pub struct HttpChatGateway {
    http: reqwest::Client,
    gateway_url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpChatGateway {
    pub fn new(config: &ChatConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            gateway_url: config.gateway_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

impl ChatGateway for HttpChatGateway {
    async fn complete(&self, system: &str, user: &str) -> Result<CompletionResponse, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingCredential)?;

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                GatewayMessage {
                    role: "system",
                    content: system,
                },
                GatewayMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .http
            .post(&self.gateway_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            429 => Err(ChatError::RateLimited),
            402 => Err(ChatError::CreditsExhausted),
            code if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(ChatError::Upstream { status: code, body })
            }
            _ => Ok(response.json().await?),
        }
    }
}
