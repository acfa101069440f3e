//! The hero as seen by site handlers.
//!
//! Handlers only touch the hero through [`HeroResources`], so a host with
//! its own hero model can implement the trait instead of using [`Hero`].

use im::Vector;
use serde::{Deserialize, Serialize};

use super::crystal::{Crystal, CrystalInventory};
use crate::core::RandomSource;
use crate::skills::{Skill, SkillCatalog, SkillId, SkillSelector};

/// Hero state that site actions read and mutate.
pub trait HeroResources {
    fn movement_points(&self) -> u32;

    /// Spend `amount` movement points.
    ///
    /// Returns `false` and leaves the balance untouched if the hero
    /// cannot afford it.
    fn spend_movement(&mut self, amount: u32) -> bool;

    fn gain_crystal(&mut self, color: Crystal);

    fn fame(&self) -> u32;

    fn gain_fame(&mut self, amount: u32);
}

/// Default hero model.
///
/// Cloning is cheap: learned skills live in a persistent vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Hero class identity (e.g. "GOLDYX"). Matched case-insensitively.
    pub class: String,
    movement_points: u32,
    fame: u32,
    crystals: CrystalInventory,
    skills: Vector<SkillId>,
}

impl Hero {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            movement_points: 0,
            fame: 0,
            crystals: CrystalInventory::new(),
            skills: Vector::new(),
        }
    }

    /// Set the starting movement balance (builder pattern).
    #[must_use]
    pub fn with_movement(mut self, points: u32) -> Self {
        self.movement_points = points;
        self
    }

    /// Replace the movement balance, e.g. at the start of a turn.
    pub fn set_movement(&mut self, points: u32) {
        self.movement_points = points;
    }

    #[must_use]
    pub fn crystals(&self) -> &CrystalInventory {
        &self.crystals
    }

    #[must_use]
    pub fn skills(&self) -> &Vector<SkillId> {
        &self.skills
    }

    #[must_use]
    pub fn knows_skill(&self, id: &SkillId) -> bool {
        self.skills.contains(id)
    }

    /// Learn a skill. Returns `false` if it was already known.
    pub fn learn_skill(&mut self, id: SkillId) -> bool {
        if self.knows_skill(&id) {
            return false;
        }
        self.skills.push_back(id);
        true
    }

    /// Draw a level-up offer: `count` random skills of this hero's class
    /// that the hero does not know yet.
    pub fn skill_offer(
        &self,
        catalog: &SkillCatalog,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> Vec<Skill> {
        let selector = SkillSelector::excluding(self.skills.iter().cloned()).take(count);
        catalog.random_skills(&self.class, selector, rng)
    }
}

impl HeroResources for Hero {
    fn movement_points(&self) -> u32 {
        self.movement_points
    }

    fn spend_movement(&mut self, amount: u32) -> bool {
        match self.movement_points.checked_sub(amount) {
            Some(rest) => {
                self.movement_points = rest;
                true
            }
            None => false,
        }
    }

    fn gain_crystal(&mut self, color: Crystal) {
        self.crystals.add(color);
    }

    fn fame(&self) -> u32 {
        self.fame
    }

    fn gain_fame(&mut self, amount: u32) {
        self.fame = self.fame.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_spend_movement_never_goes_negative() {
        let mut hero = Hero::new("GOLDYX").with_movement(1);

        assert!(hero.spend_movement(1));
        assert_eq!(hero.movement_points(), 0);

        assert!(!hero.spend_movement(1));
        assert_eq!(hero.movement_points(), 0);
    }

    #[test]
    fn test_gain_resources() {
        let mut hero = Hero::new("TOVAK");
        hero.gain_crystal(Crystal::Red);
        hero.gain_fame(3);
        hero.gain_fame(5);

        assert_eq!(hero.crystals().count(Crystal::Red), 1);
        assert_eq!(hero.fame(), 8);
    }

    #[test]
    fn test_learn_skill_is_idempotent() {
        let mut hero = Hero::new("GOLDYX");
        assert!(hero.learn_skill(SkillId::new("flight")));
        assert!(!hero.learn_skill(SkillId::new("flight")));
        assert_eq!(hero.skills().len(), 1);
    }

    #[test]
    fn test_skill_offer_skips_known_skills() {
        let catalog = SkillCatalog::standard();
        let mut hero = Hero::new("goldyx");
        hero.learn_skill(SkillId::new("flight"));
        hero.learn_skill(SkillId::new("freezing_power"));

        let mut rng = GameRng::new(11);
        for _ in 0..20 {
            let offer = hero.skill_offer(&catalog, 3, &mut rng);
            assert_eq!(offer.len(), 3);
            assert!(offer.iter().all(|s| !hero.knows_skill(&s.id)));
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut hero = Hero::new("NOROWAS").with_movement(4);
        let snapshot = hero.clone();
        hero.spend_movement(2);
        hero.learn_skill(SkillId::new("leadership"));

        assert_eq!(snapshot.movement_points(), 4);
        assert!(snapshot.skills().is_empty());
    }
}
