//! Enemy archetypes - immutable templates selected for encounters.

use serde::{Deserialize, Serialize};

/// Closed set of enemy token types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyType {
    OrcSummoner,
    GolemSmall,
}

impl EnemyType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EnemyType::OrcSummoner => "orc_summoner",
            EnemyType::GolemSmall => "golem_small",
        }
    }
}

impl std::fmt::Display for EnemyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Damage resistances. All default to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Resistances {
    pub physical: bool,
    pub fire: bool,
    pub ice: bool,
}

impl Resistances {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            physical: false,
            fire: false,
            ice: false,
        }
    }

    #[must_use]
    pub const fn physical() -> Self {
        Self {
            physical: true,
            fire: false,
            ice: false,
        }
    }
}

/// Enemy template handed to the combat boundary.
///
/// ## Example
///
/// ```
/// use site_encounter::combat::{EnemyArchetype, EnemyType};
///
/// let guardian = EnemyArchetype::crystal_guardian();
/// assert_eq!(guardian.enemy_type, EnemyType::GolemSmall);
/// assert!(guardian.resistances.physical);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyArchetype {
    pub name: String,
    pub armor: u32,
    pub attack: u32,
    /// Fame awarded for defeating this enemy.
    pub fame: u32,
    pub icon: String,
    pub enemy_type: EnemyType,
    /// Display color (CSS).
    pub color: String,
    #[serde(default)]
    pub resistances: Resistances,
}

impl EnemyArchetype {
    /// Elite defender of a mine.
    #[must_use]
    pub fn mine_overseer() -> Self {
        Self {
            name: "Minen-Aufseher".to_string(),
            armor: 5,
            attack: 5,
            fame: 5,
            icon: "👺".to_string(),
            enemy_type: EnemyType::OrcSummoner,
            color: "#8b5cf6".to_string(),
            resistances: Resistances::none(),
        }
    }

    /// Common defender of a mine.
    #[must_use]
    pub fn crystal_guardian() -> Self {
        Self {
            name: "Kristall-Wächter".to_string(),
            armor: 4,
            attack: 3,
            fame: 3,
            icon: "🗿".to_string(),
            enemy_type: EnemyType::GolemSmall,
            color: "#64748b".to_string(),
            resistances: Resistances::physical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mine_overseer_stats() {
        let enemy = EnemyArchetype::mine_overseer();
        assert_eq!(enemy.name, "Minen-Aufseher");
        assert_eq!((enemy.armor, enemy.attack, enemy.fame), (5, 5, 5));
        assert_eq!(enemy.enemy_type, EnemyType::OrcSummoner);
        assert_eq!(enemy.resistances, Resistances::none());
    }

    #[test]
    fn test_crystal_guardian_stats() {
        let enemy = EnemyArchetype::crystal_guardian();
        assert_eq!(enemy.name, "Kristall-Wächter");
        assert_eq!((enemy.armor, enemy.attack, enemy.fame), (4, 3, 3));
        assert_eq!(enemy.enemy_type, EnemyType::GolemSmall);
        assert!(enemy.resistances.physical);
        assert!(!enemy.resistances.fire);
    }

    #[test]
    fn test_type_tag_serialization() {
        let json = serde_json::to_string(&EnemyType::OrcSummoner).unwrap();
        assert_eq!(json, "\"orc_summoner\"");
        assert_eq!(EnemyType::GolemSmall.to_string(), "golem_small");
    }

    #[test]
    fn test_resistances_optional_in_documents() {
        let json = r##"{
            "name": "Test",
            "armor": 1,
            "attack": 2,
            "fame": 1,
            "icon": "x",
            "enemy_type": "golem_small",
            "color": "#000"
        }"##;
        let enemy: EnemyArchetype = serde_json::from_str(json).unwrap();
        assert_eq!(enemy.resistances, Resistances::default());
    }
}
