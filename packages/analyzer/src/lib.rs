// ABOUTME: StackScout analyzer library - conversation context extraction and project analysis
// ABOUTME: Provides the extractor, analyzer, readiness gate, summary, and session types

pub mod analysis;
pub mod context;
pub mod error;
pub mod extractor;
pub mod readiness;
pub mod rules;
pub mod session;
pub mod summary;

pub use analysis::{
    BudgetConstraints, BusinessModel, Complexity, ProjectAnalysis, ProjectAnalyzer,
    TechnicalExpertise, TimeConstraints,
};
pub use context::ProjectContext;
pub use error::{AnalyzerError, Result};
pub use extractor::ContextExtractor;
pub use readiness::is_ready_for_recommendation;
pub use session::{ConversationSession, RecommendationRequest};
pub use summary::conversation_summary;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analysis::{ProjectAnalysis, ProjectAnalyzer};
    pub use crate::context::ProjectContext;
    pub use crate::error::{AnalyzerError, Result};
    pub use crate::extractor::ContextExtractor;
    pub use crate::readiness::is_ready_for_recommendation;
    pub use crate::session::{ConversationSession, RecommendationRequest};
    pub use crate::summary::conversation_summary;
    pub use stackscout_core::{ChatMessage, MessageRole};
}
