// ABOUTME: Shared utility functions for StackScout
// ABOUTME: ID generation for conversation records

use nanoid::nanoid;

/// Generate a unique message ID (12-character nanoid format)
pub fn generate_message_id() -> String {
    nanoid!(12)
}

/// Generate a unique session ID (12-character nanoid format)
pub fn generate_session_id() -> String {
    nanoid!(12)
}
