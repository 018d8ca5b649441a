// ABOUTME: Human-readable conversation summary for the recommendation prompt
// ABOUTME: Fixed field order, "Label: value" lines, unset fields omitted

use crate::context::ProjectContext;

/// Render the context as "Label: value" lines in fixed field order
///
/// The output is passed verbatim into the downstream recommendation prompt,
/// so the format is a contract: one line per set field, unset and empty
/// fields omitted, empty string for an empty context.
pub fn conversation_summary(context: &ProjectContext) -> String {
    let mut lines = Vec::new();

    if let Some(project_type) = context.project_type() {
        lines.push(format!("Project type: {}", project_type));
    }
    if let Some(team_size) = context.team_size() {
        lines.push(format!("Team size: {}", team_size));
    }
    if let Some(timeline) = context.timeline() {
        lines.push(format!("Timeline: {}", timeline));
    }
    if let Some(background) = context.technical_background() {
        lines.push(format!("Technical background: {}", background));
    }
    if !context.specific_requirements().is_empty() {
        lines.push(format!(
            "Requirements: {}",
            context.specific_requirements().join(", ")
        ));
    }
    if !context.concerns().is_empty() {
        lines.push(format!("Concerns: {}", context.concerns().join(", ")));
    }

    lines.join("\n")
}
