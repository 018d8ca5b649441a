// ABOUTME: Accumulated project context derived from a conversation
// ABOUTME: Scalar fields are set-once, tag sets grow monotonically without duplicates

use serde::{Deserialize, Serialize};

use crate::rules::{ScalarField, TagField};

/// The structured understanding of a project, built up across user messages
///
/// Fields are private so that only the extractor (via the crate-internal
/// mutators) can write them: scalar fields are assigned at most once, and the
/// tag vectors only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    project_type: Option<String>,
    team_size: Option<String>,
    timeline: Option<String>,
    technical_background: Option<String>,
    specific_requirements: Vec<String>,
    concerns: Vec<String>,
}

impl ProjectContext {
    /// Create an empty context for a new conversation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_type(&self) -> Option<&str> {
        self.project_type.as_deref()
    }

    pub fn team_size(&self) -> Option<&str> {
        self.team_size.as_deref()
    }

    pub fn timeline(&self) -> Option<&str> {
        self.timeline.as_deref()
    }

    pub fn technical_background(&self) -> Option<&str> {
        self.technical_background.as_deref()
    }

    /// Detected requirement tags, in first-seen order
    pub fn specific_requirements(&self) -> &[String] {
        &self.specific_requirements
    }

    /// Detected concern tags, in first-seen order
    pub fn concerns(&self) -> &[String] {
        &self.concerns
    }

    /// True if no signal has been extracted yet
    pub fn is_empty(&self) -> bool {
        self.project_type.is_none()
            && self.team_size.is_none()
            && self.timeline.is_none()
            && self.technical_background.is_none()
            && self.specific_requirements.is_empty()
            && self.concerns.is_empty()
    }

    /// Assign a scalar field if it is still unset; later matches are ignored
    pub(crate) fn assign_scalar(&mut self, field: ScalarField, value: &str) {
        let slot = match field {
            ScalarField::ProjectType => &mut self.project_type,
            ScalarField::TeamSize => &mut self.team_size,
            ScalarField::Timeline => &mut self.timeline,
            ScalarField::TechnicalBackground => &mut self.technical_background,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    /// Add a tag to the given set unless already present
    pub(crate) fn add_tag(&mut self, field: TagField, tag: &str) {
        let tags = match field {
            TagField::Requirement => &mut self.specific_requirements,
            TagField::Concern => &mut self.concerns,
        };
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
}
