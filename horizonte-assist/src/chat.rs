use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AssistError;

/// Static apology shown when the assistant is unreachable
pub const FALLBACK_REPLY: &str = "Tente novamente em breve.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of the travel-assistant transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Conversational collaborator for the public site. Failures degrade to
/// `FALLBACK_REPLY` at the call site, never crash the session.
#[async_trait]
pub trait ChatAssistant: Send + Sync {
    async fn reply(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, AssistError>;
}

/// Canned assistant for tests and offline demos
pub struct MockChatAssistant {
    fail: bool,
}

impl MockChatAssistant {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Default for MockChatAssistant {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatAssistant for MockChatAssistant {
    async fn reply(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, AssistError> {
        if self.fail {
            return Err(AssistError::CallFailed(
                "simulated assistant outage".to_string(),
            ));
        }

        Ok(format!(
            "Posso ajudar com \"{message}\" ({} mensagens anteriores).",
            history.len()
        ))
    }
}
