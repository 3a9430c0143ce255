//! Voice skill configuration

use serde::Deserialize;

/// Skill identity configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillConfig {
    /// When set, requests addressed to any other skill id are rejected
    pub application_id: Option<String>,
}

impl SkillConfig {
    /// Whether a request carrying `application_id` is addressed to this skill.
    pub fn accepts(&self, application_id: Option<&str>) -> bool {
        match self.application_id.as_deref().filter(|id| !id.is_empty()) {
            Some(expected) => application_id == Some(expected),
            None => true,
        }
    }
}
