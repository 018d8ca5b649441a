// ABOUTME: Project analysis derived from accumulated conversation context
// ABOUTME: Pure classification into complexity, business model, and constraint buckets

use serde::{Deserialize, Serialize};

use crate::context::ProjectContext;

/// Requirement-count threshold at which a project is considered moderate
pub const MODERATE_REQUIREMENT_THRESHOLD: usize = 2;
/// Requirement-count threshold at which a project is considered complex
pub const COMPLEX_REQUIREMENT_THRESHOLD: usize = 4;

/// Overall project complexity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

/// Business model vocabulary the recommendation step keys off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessModel {
    Saas,
    Marketplace,
    Other,
}

/// Time pressure bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeConstraints {
    Tight,
    Normal,
}

/// Budget pressure bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetConstraints {
    Minimal,
    Normal,
}

/// User's technical expertise bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalExpertise {
    Beginner,
    Intermediate,
    Advanced,
}

/// Coarse classification of the project under discussion
///
/// A pure view over [`ProjectContext`]: always recomputed in full, never
/// cached or partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    pub complexity: Complexity,
    pub business_model: BusinessModel,
    pub time_constraints: TimeConstraints,
    pub budget_constraints: BudgetConstraints,
    pub technical_expertise: TechnicalExpertise,
}

/// Project analyzer service
#[derive(Debug, Default)]
pub struct ProjectAnalyzer;

impl ProjectAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Classify the project from the current context
    pub fn analyze(&self, context: &ProjectContext) -> ProjectAnalysis {
        let complexity = match context.specific_requirements().len() {
            n if n >= COMPLEX_REQUIREMENT_THRESHOLD => Complexity::Complex,
            n if n >= MODERATE_REQUIREMENT_THRESHOLD => Complexity::Moderate,
            _ => Complexity::Simple,
        };

        let business_model = match context.project_type() {
            Some("saas") => BusinessModel::Saas,
            Some("marketplace") => BusinessModel::Marketplace,
            _ => BusinessModel::Other,
        };

        let time_constraints = if context.timeline() == Some("urgent") {
            TimeConstraints::Tight
        } else {
            TimeConstraints::Normal
        };

        let budget_constraints = if context.concerns().iter().any(|c| c == "cost") {
            BudgetConstraints::Minimal
        } else {
            BudgetConstraints::Normal
        };

        let technical_expertise = match context.technical_background() {
            Some("beginner") => TechnicalExpertise::Beginner,
            Some("advanced") => TechnicalExpertise::Advanced,
            _ => TechnicalExpertise::Intermediate,
        };

        ProjectAnalysis {
            complexity,
            business_model,
            time_constraints,
            budget_constraints,
            technical_expertise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ContextExtractor;
    use pretty_assertions::assert_eq;
    use stackscout_core::ChatMessage;

    fn context_from(content: &str) -> ProjectContext {
        let mut context = ProjectContext::new();
        ContextExtractor::new().extract(&ChatMessage::user(content), &mut context);
        context
    }

    #[test]
    fn test_empty_context_yields_defaults() {
        let analysis = ProjectAnalyzer::new().analyze(&ProjectContext::new());

        assert_eq!(analysis.complexity, Complexity::Simple);
        assert_eq!(analysis.business_model, BusinessModel::Other);
        assert_eq!(analysis.time_constraints, TimeConstraints::Normal);
        assert_eq!(analysis.budget_constraints, BudgetConstraints::Normal);
        assert_eq!(analysis.technical_expertise, TechnicalExpertise::Intermediate);
    }

    #[test]
    fn test_complexity_promotes_with_requirement_count() {
        let analyzer = ProjectAnalyzer::new();

        let one = context_from("I need authentication");
        assert_eq!(analyzer.analyze(&one).complexity, Complexity::Simple);

        let two = context_from("I need authentication and payments");
        assert_eq!(analyzer.analyze(&two).complexity, Complexity::Moderate);

        let many = context_from(
            "I need a SaaS with authentication, payments, real-time features, analytics, and email notifications",
        );
        assert!(many.specific_requirements().len() >= COMPLEX_REQUIREMENT_THRESHOLD);
        assert_eq!(analyzer.analyze(&many).complexity, Complexity::Complex);
    }

    #[test]
    fn test_business_model_mirrors_project_type() {
        let analyzer = ProjectAnalyzer::new();

        let saas = context_from("building a saas");
        assert_eq!(analyzer.analyze(&saas).business_model, BusinessModel::Saas);

        let marketplace = context_from("building a marketplace");
        assert_eq!(
            analyzer.analyze(&marketplace).business_model,
            BusinessModel::Marketplace
        );

        let blog = context_from("building a blog");
        assert_eq!(analyzer.analyze(&blog).business_model, BusinessModel::Other);
    }

    #[test]
    fn test_urgent_timeline_means_tight_constraints() {
        let analyzer = ProjectAnalyzer::new();

        let urgent = context_from("I need this asap");
        assert_eq!(analyzer.analyze(&urgent).time_constraints, TimeConstraints::Tight);

        let flexible = context_from("No rush on this one");
        assert_eq!(
            analyzer.analyze(&flexible).time_constraints,
            TimeConstraints::Normal
        );
    }

    #[test]
    fn test_cost_concern_means_minimal_budget() {
        let analyzer = ProjectAnalyzer::new();

        let costly = context_from("I'm worried this will be expensive");
        assert_eq!(
            analyzer.analyze(&costly).budget_constraints,
            BudgetConstraints::Minimal
        );
    }

    #[test]
    fn test_expertise_mapping() {
        let analyzer = ProjectAnalyzer::new();

        let beginner = context_from("I'm a beginner");
        assert_eq!(
            analyzer.analyze(&beginner).technical_expertise,
            TechnicalExpertise::Beginner
        );

        let advanced = context_from("I have ten years of experience");
        assert_eq!(
            analyzer.analyze(&advanced).technical_expertise,
            TechnicalExpertise::Advanced
        );
    }

    #[test]
    fn test_analysis_is_pure() {
        let context = context_from("solo founder building a saas with payments, needed asap");
        let analyzer = ProjectAnalyzer::new();

        assert_eq!(analyzer.analyze(&context), analyzer.analyze(&context));
    }
}
