// ABOUTME: Conversation session owning the message log and its project context
// ABOUTME: Per-turn recording, readiness checks, recommendation handoff, and JSON snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use stackscout_core::{generate_session_id, ChatMessage};

use crate::analysis::{ProjectAnalysis, ProjectAnalyzer};
use crate::context::ProjectContext;
use crate::error::{AnalyzerError, Result};
use crate::extractor::ContextExtractor;
use crate::readiness::is_ready_for_recommendation;
use crate::summary::conversation_summary;

/// Snapshot format version; bumped when the serialized layout changes
const SNAPSHOT_VERSION: u32 = 1;

/// Handoff value for the external recommendation step
///
/// Carries the derived analysis plus the summary string that is passed
/// verbatim into the recommendation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub analysis: ProjectAnalysis,
    pub summary: String,
}

/// Serialized form of a session
#[derive(Serialize, Deserialize)]
struct SessionSnapshot {
    version: u32,
    id: String,
    created_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
    context: ProjectContext,
}

/// One conversation's message log and its exclusively-owned context
///
/// A session is never shared across conversations: one chat session, one
/// context, one logical owner. Messages are appended in arrival order and
/// extraction runs synchronously per turn.
#[derive(Debug)]
pub struct ConversationSession {
    id: String,
    created_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
    context: ProjectContext,
    extractor: ContextExtractor,
    analyzer: ProjectAnalyzer,
}

impl ConversationSession {
    /// Start a fresh session with an empty context
    pub fn new() -> Self {
        let id = generate_session_id();
        info!("Starting conversation session: {}", id);

        Self {
            id,
            created_at: Utc::now(),
            messages: Vec::new(),
            context: ProjectContext::new(),
            extractor: ContextExtractor::new(),
            analyzer: ProjectAnalyzer::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a turn and run extraction over it
    ///
    /// Extraction is a no-op for assistant turns; the message is still
    /// recorded in the log.
    pub fn record(&mut self, message: ChatMessage) -> &ChatMessage {
        debug!(
            "Recording {:?} message {} in session {}",
            message.role, message.id, self.id
        );

        self.extractor.extract(&message, &mut self.context);
        self.messages.push(message);
        self.messages.last().expect("message just pushed")
    }

    /// Record a user-authored turn
    pub fn record_user_message(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.record(ChatMessage::user(content))
    }

    /// Record an assistant-authored turn
    pub fn record_assistant_message(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.record(ChatMessage::assistant(content))
    }

    /// The full message log in arrival order
    pub fn history(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// The accumulated project context
    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// Recompute the project analysis from the current context
    pub fn analysis(&self) -> ProjectAnalysis {
        self.analyzer.analyze(&self.context)
    }

    /// True once enough signal exists to request a recommendation
    pub fn is_ready(&self) -> bool {
        is_ready_for_recommendation(&self.context)
    }

    /// The "Label: value" summary handed to the recommendation prompt
    pub fn summary(&self) -> String {
        conversation_summary(&self.context)
    }

    /// Produce the recommendation handoff, if the readiness gate is open
    pub fn recommendation_request(&self) -> Option<RecommendationRequest> {
        if !self.is_ready() {
            return None;
        }

        info!("Session {} is ready for recommendation", self.id);
        Some(RecommendationRequest {
            analysis: self.analysis(),
            summary: self.summary(),
        })
    }

    /// Serialize the session to a JSON snapshot
    pub fn snapshot(&self) -> Result<String> {
        let snapshot = SessionSnapshot {
            version: SNAPSHOT_VERSION,
            id: self.id.clone(),
            created_at: self.created_at,
            messages: self.messages.clone(),
            context: self.context.clone(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rehydrate a session from a JSON snapshot
    ///
    /// The stored context is restored as-is rather than rebuilt by replaying
    /// the log; the two are equivalent by the extractor's ordering guarantee.
    pub fn restore(json: &str) -> Result<Self> {
        let snapshot: SessionSnapshot = serde_json::from_str(json)?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(AnalyzerError::InvalidSnapshot(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }

        info!("Restoring conversation session: {}", snapshot.id);
        Ok(Self {
            id: snapshot.id,
            created_at: snapshot.created_at,
            messages: snapshot.messages,
            context: snapshot.context,
            extractor: ContextExtractor::new(),
            analyzer: ProjectAnalyzer::new(),
        })
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
