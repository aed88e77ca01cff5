pub mod chat;
pub mod copy;

pub use chat::{ChatAssistant, ChatMessage, ChatRole, MockChatAssistant, FALLBACK_REPLY};
pub use copy::{CopyGenerator, MockCopyGenerator, PackageCopy};

/// Collaborator call failures. Always recovered locally with a fallback
/// value; never propagated into catalog or ledger state.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("Assistant not configured: {0}")]
    NotConfigured(String),

    #[error("Assistant call failed: {0}")]
    CallFailed(String),

    #[error("Malformed assistant response: {0}")]
    MalformedResponse(String),
}
