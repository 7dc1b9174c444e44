use crate::error::BackendError;
use crate::usage::UsageTracker;
use serde::{Deserialize, Serialize};

/// Represents one message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Role of the message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// Contract every provider adapter must satisfy: send a conversation, get
/// text back, keep running usage statistics.
///
/// `query` takes `&mut self` because each call updates the instance's
/// [`UsageTracker`]; the counters are not synchronized internally, so
/// concurrent callers need one backend per task or an external lock.
#[async_trait::async_trait]
pub trait ChatBackend: Send {
    /// Canonical provider identifier (e.g. "argo").
    fn provider_name(&self) -> &'static str;

    /// Resolved model name this instance targets for its lifetime.
    fn model_name(&self) -> &str;

    /// Send the full conversation history and return the generated text.
    ///
    /// Failures are returned as values, never panics, so long-running
    /// callers can continue after one bad call. A successful empty reply
    /// (`Ok("")`) is distinguishable from every failure variant.
    async fn query(&mut self, history: &[ConversationTurn]) -> Result<String, BackendError>;

    /// Running token/cost counters accumulated by this instance.
    fn usage(&self) -> &UsageTracker;
}
