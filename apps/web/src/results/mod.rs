// Results view: a pure function of the `role` query parameter.
// The payload is the same fixed dataset for every role; only the label changes.

pub mod handlers;
pub mod mock;
pub mod report;

use serde::{Deserialize, Serialize};

/// Role shown when the query carries no usable `role`.
pub const DEFAULT_ROLE: &str = "Web Developer";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsQuery {
    pub role: Option<String>,
}

/// Resolves the displayed role label. Empty or missing values fall back to
/// [`DEFAULT_ROLE`]; anything else is shown verbatim.
pub fn resolve_role(role: Option<&str>) -> String {
    match role {
        Some(role) if !role.is_empty() => role.to_string(),
        _ => DEFAULT_ROLE.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    #[serde(rename = "Beginner-Intermediate")]
    BeginnerIntermediate,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::BeginnerIntermediate => "Beginner-Intermediate",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillBreakdown {
    pub strong: Vec<String>,
    pub weak: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadmapPhase {
    pub period: String,
    pub title: String,
    pub skills: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    pub stack: Vec<String>,
    pub difficulty: Difficulty,
    pub impact: String,
    pub estimated_time: String,
}

/// Everything the results page renders.
#[derive(Debug, Clone, Serialize)]
pub struct ResultPayload {
    pub role: String,
    /// 0 – 100
    pub score: u32,
    pub skills: SkillBreakdown,
    pub roadmap: Vec<RoadmapPhase>,
    pub projects: Vec<ProjectIdea>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_role_defaults_to_web_developer() {
        assert_eq!(resolve_role(None), "Web Developer");
    }

    #[test]
    fn test_empty_role_defaults_to_web_developer() {
        assert_eq!(resolve_role(Some("")), "Web Developer");
    }

    #[test]
    fn test_role_outside_catalog_is_shown_verbatim() {
        assert_eq!(resolve_role(Some("Astronaut")), "Astronaut");
        assert_eq!(resolve_role(Some("Data Engineer")), "Data Engineer");
    }

    #[test]
    fn test_difficulty_serializes_with_display_label() {
        let json = serde_json::to_value(Difficulty::BeginnerIntermediate).unwrap();
        assert_eq!(json, "Beginner-Intermediate");
        assert_eq!(Difficulty::Advanced.label(), "Advanced");
    }
}
