//! Rules configuration.
//!
//! Hosts tune encounter odds and enemy templates at startup. Every field
//! has a default, so a partial JSON/TOML document is enough.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::combat::EnemyArchetype;

/// Default share of the roll range that selects the mine's elite defender.
pub const DEFAULT_ELITE_CHANCE: f64 = 0.4;

/// Default number of skills offered when the caller does not say.
pub const DEFAULT_SKILL_OFFER: usize = 2;

/// Tunable rules for site interaction and skill offers.
///
/// ## Example
///
/// ```
/// use site_encounter::core::RulesConfig;
///
/// let config = RulesConfig::default().with_elite_chance(0.25);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.default_skill_offer, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Top share of the `[0, 1)` roll that selects `mine_overseer`.
    pub elite_chance: f64,

    /// Skill offer size when unspecified.
    pub default_skill_offer: usize,

    /// Elite mine defender.
    pub mine_overseer: EnemyArchetype,

    /// Common mine defender.
    pub mine_guardian: EnemyArchetype,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            elite_chance: DEFAULT_ELITE_CHANCE,
            default_skill_offer: DEFAULT_SKILL_OFFER,
            mine_overseer: EnemyArchetype::mine_overseer(),
            mine_guardian: EnemyArchetype::crystal_guardian(),
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_elite_chance(mut self, chance: f64) -> Self {
        self.elite_chance = chance;
        self
    }

    #[must_use]
    pub fn with_default_skill_offer(mut self, count: usize) -> Self {
        self.default_skill_offer = count;
        self
    }

    #[must_use]
    pub fn with_mine_defenders(mut self, overseer: EnemyArchetype, guardian: EnemyArchetype) -> Self {
        self.mine_overseer = overseer;
        self.mine_guardian = guardian;
        self
    }

    /// Check invariants the handlers rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.elite_chance) {
            return Err(ConfigError::EliteChanceOutOfRange(self.elite_chance));
        }
        if self.default_skill_offer == 0 {
            return Err(ConfigError::ZeroSkillOffer);
        }
        Ok(())
    }
}
