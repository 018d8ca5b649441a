// ABOUTME: Conversation type definitions shared across StackScout packages
// ABOUTME: Defines message roles and the immutable chat message record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::generate_message_id;

/// Role of the message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One turn in a conversation
///
/// Created once per turn and never mutated afterwards; the owning session
/// appends messages in arrival order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message with the given role and content
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: generate_message_id(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a user-authored message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant-authored message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// True if this message was authored by the user
    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
