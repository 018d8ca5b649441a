// ABOUTME: Core types and utilities for StackScout
// ABOUTME: Foundational package providing shared conversation types across all StackScout packages

pub mod types;
pub mod utils;

// Re-export main types
pub use types::{ChatMessage, MessageRole};

// Re-export utilities
pub use utils::{generate_message_id, generate_session_id};
