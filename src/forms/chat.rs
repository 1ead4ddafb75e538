use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Raw JSON body of `POST /chat`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatForm {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// Validated chat message ready for the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatFormPayload {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ChatFormError {
    #[error("Chat form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for ChatFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<ChatForm> for ChatFormPayload {
    type Error = ChatFormError;

    fn try_from(value: ChatForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let message = value.message.trim().to_string();
        if message.is_empty() {
            return Err(ChatFormError::Validation(
                "message cannot be blank".to_string(),
            ));
        }
        Ok(Self { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_the_message() {
        let payload = ChatFormPayload::try_from(ChatForm {
            message: "  What is Betelgeuse?  ".to_string(),
        })
        .unwrap();
        assert_eq!(payload.message, "What is Betelgeuse?");
    }

    #[test]
    fn rejects_empty_and_whitespace_messages() {
        assert!(ChatFormPayload::try_from(ChatForm {
            message: String::new(),
        })
        .is_err());
        assert!(ChatFormPayload::try_from(ChatForm {
            message: "   ".to_string(),
        })
        .is_err());
    }

    #[test]
    fn rejects_oversized_messages() {
        assert!(ChatFormPayload::try_from(ChatForm {
            message: "x".repeat(2001),
        })
        .is_err());
    }
}
