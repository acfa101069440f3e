//! Encounter selection for attacked sites.

use crate::combat::EnemyArchetype;
use crate::core::{RandomSource, RulesConfig};

/// Chooses between an elite and a common defender.
///
/// One uniform draw in `[0, 1)`; a roll in the top `elite_chance` of the
/// range selects the elite.
///
/// ## Example
///
/// ```
/// use site_encounter::combat::EnemyArchetype;
/// use site_encounter::sites::EncounterGenerator;
///
/// let generator = EncounterGenerator::new(
///     EnemyArchetype::mine_overseer(),
///     EnemyArchetype::crystal_guardian(),
///     0.4,
/// );
/// assert_eq!(generator.select(0.95).name, "Minen-Aufseher");
/// assert_eq!(generator.select(0.10).name, "Kristall-Wächter");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EncounterGenerator {
    elite: EnemyArchetype,
    common: EnemyArchetype,
    elite_chance: f64,
}

impl EncounterGenerator {
    #[must_use]
    pub fn new(elite: EnemyArchetype, common: EnemyArchetype, elite_chance: f64) -> Self {
        Self {
            elite,
            common,
            elite_chance: elite_chance.clamp(0.0, 1.0),
        }
    }

    /// Mine defenders from the rules configuration.
    #[must_use]
    pub fn for_mine(config: &RulesConfig) -> Self {
        Self::new(
            config.mine_overseer.clone(),
            config.mine_guardian.clone(),
            config.elite_chance,
        )
    }

    #[must_use]
    pub fn elite_chance(&self) -> f64 {
        self.elite_chance
    }

    /// Archetype for a given roll in `[0, 1)`.
    #[must_use]
    pub fn select(&self, roll: f64) -> &EnemyArchetype {
        if roll >= 1.0 - self.elite_chance {
            &self.elite
        } else {
            &self.common
        }
    }

    /// Draw a roll and select.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> &EnemyArchetype {
        let roll = rng.next_f64();
        let enemy = self.select(roll);
        tracing::debug!(roll, enemy = %enemy.name, "encounter.rolled");
        enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::EnemyType;
    use crate::core::GameRng;

    fn mine() -> EncounterGenerator {
        EncounterGenerator::for_mine(&RulesConfig::default())
    }

    #[test]
    fn test_top_of_range_selects_elite() {
        let generator = mine();
        assert_eq!(generator.select(0.61).enemy_type, EnemyType::OrcSummoner);
        assert_eq!(generator.select(0.999).enemy_type, EnemyType::OrcSummoner);
    }

    #[test]
    fn test_rest_of_range_selects_common() {
        let generator = mine();
        assert_eq!(generator.select(0.0).enemy_type, EnemyType::GolemSmall);
        assert_eq!(generator.select(0.59).enemy_type, EnemyType::GolemSmall);
    }

    #[test]
    fn test_extreme_chances() {
        let never = EncounterGenerator::new(
            EnemyArchetype::mine_overseer(),
            EnemyArchetype::crystal_guardian(),
            0.0,
        );
        assert_eq!(never.select(0.999).enemy_type, EnemyType::GolemSmall);

        let always = EncounterGenerator::new(
            EnemyArchetype::mine_overseer(),
            EnemyArchetype::crystal_guardian(),
            1.0,
        );
        assert_eq!(always.select(0.0).enemy_type, EnemyType::OrcSummoner);
    }

    #[test]
    fn test_chance_is_clamped() {
        let generator = EncounterGenerator::new(
            EnemyArchetype::mine_overseer(),
            EnemyArchetype::crystal_guardian(),
            3.0,
        );
        assert_eq!(generator.elite_chance(), 1.0);
    }

    #[test]
    fn test_frequency_matches_chance() {
        let generator = mine();
        let mut rng = GameRng::new(2024);
        let trials = 10_000;

        let elites = (0..trials)
            .filter(|_| generator.roll(&mut rng).enemy_type == EnemyType::OrcSummoner)
            .count();
        let share = elites as f64 / trials as f64;
        assert!((0.37..0.43).contains(&share), "elite share {share}");
    }
}
