//! Skill definitions - static, class-scoped abilities.

use serde::{Deserialize, Serialize};

/// Skill identity, unique within a hero class (e.g. `"flight"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillId(pub String);

impl SkillId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Whether a skill is always on or must be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Passive,
    Active,
}

/// Immutable catalog entry.
///
/// ## Example
///
/// ```
/// use site_encounter::skills::{Skill, SkillKind};
///
/// let flight = Skill::new("flight", "Flug", SkillKind::Active)
///     .with_icon("🕊️")
///     .with_description("Einmal pro Runde: Bewege dich auf ein angrenzendes Feld.");
///
/// assert_eq!(flight.id.as_str(), "flight");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    /// Display name.
    pub name: String,
    pub kind: SkillKind,
    pub icon: String,
    pub description: String,
}

impl Skill {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SkillKind) -> Self {
        Self {
            id: SkillId::new(id),
            name: name.into(),
            kind,
            icon: String::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
