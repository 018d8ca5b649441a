// ABOUTME: Incremental context extraction from chat messages
// ABOUTME: Runs the keyword rule table over user-authored text and updates the context in place

use stackscout_core::ChatMessage;

use crate::context::ProjectContext;
use crate::rules::{RuleTarget, RULES};

/// Extracts structured project signals from conversation messages
///
/// Stateless; all accumulated state lives in the [`ProjectContext`] owned by
/// the conversation session.
#[derive(Debug, Default)]
pub struct ContextExtractor;

impl ContextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Update the context in place from one message
    ///
    /// Assistant messages are ignored entirely: recommendations must be
    /// grounded in user-stated facts, not in the assistant's own prior
    /// suggestions. Unmatched text yields no updates, which is normal
    /// operation rather than an error.
    pub fn extract(&self, message: &ChatMessage, context: &mut ProjectContext) {
        if !message.is_user() {
            return;
        }

        let text = message.content.to_lowercase();

        for rule in RULES {
            if !rule.matches(&text) {
                continue;
            }
            match rule.target {
                RuleTarget::Scalar(field) => context.assign_scalar(field, rule.value),
                RuleTarget::Tag(field) => context.add_tag(field, rule.value),
            }
        }
    }

    /// Replay a sequence of messages in order
    ///
    /// Because the rule table is evaluated in fixed order and scalar fields
    /// are immutable once set, this yields the same context as calling
    /// [`extract`](Self::extract) once per message as each arrives.
    pub fn extract_all(&self, messages: &[ChatMessage], context: &mut ProjectContext) {
        for message in messages {
            self.extract(message, context);
        }
    }
}
