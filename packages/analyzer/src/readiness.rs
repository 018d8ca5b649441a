// ABOUTME: Readiness gate deciding when to request a stack recommendation
// ABOUTME: Deliberately low bar so the product recommends early and refines via follow-up

use crate::context::ProjectContext;

/// True once enough signal exists to productively generate a recommendation
///
/// Requires a project type plus at least one supporting signal (team size,
/// timeline, or a detected requirement). The bar is intentionally low: the
/// product recommends early and refines rather than over-interviewing.
pub fn is_ready_for_recommendation(context: &ProjectContext) -> bool {
    context.project_type().is_some()
        && (context.team_size().is_some()
            || context.timeline().is_some()
            || !context.specific_requirements().is_empty())
}
