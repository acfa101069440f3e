//! Per-class skill registry and random skill offers.
//!
//! The catalog maps a hero class to its ordered list of learnable skills.
//! Class lookup is case-insensitive, and an unknown class simply has no
//! skills.

use rustc_hash::{FxHashMap, FxHashSet};

use super::skill::{Skill, SkillId};
use crate::core::{CatalogError, RandomSource, RulesConfig, DEFAULT_SKILL_OFFER};

/// Which skills to sample and how many.
///
/// A count of `None` means "the catalog's default offer size", which
/// comes from [`RulesConfig::default_skill_offer`].
///
/// ## Example
///
/// ```
/// use site_encounter::skills::SkillSelector;
///
/// // Three skills from the whole class list.
/// let plain = SkillSelector::from(3);
/// assert_eq!(plain.count(), Some(3));
///
/// // The catalog's default offer size, never "flight".
/// let filtered = SkillSelector::excluding(["flight"]);
/// assert_eq!(filtered.count(), None);
/// assert_eq!(filtered.count_or(2), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkillSelector {
    /// Sample from the full class list.
    Count(Option<usize>),
    /// Drop `exclude` first, then sample `count`.
    Excluding {
        exclude: FxHashSet<SkillId>,
        count: Option<usize>,
    },
}

impl SkillSelector {
    /// Exclude the given skill ids. The count is left to the catalog.
    pub fn excluding<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SkillId>,
    {
        Self::Excluding {
            exclude: ids.into_iter().map(Into::into).collect(),
            count: None,
        }
    }

    /// Override the number of skills to draw.
    #[must_use]
    pub fn take(self, count: usize) -> Self {
        match self {
            Self::Count(_) => Self::Count(Some(count)),
            Self::Excluding { exclude, .. } => Self::Excluding {
                exclude,
                count: Some(count),
            },
        }
    }

    /// The requested count, if the caller gave one.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Count(count) | Self::Excluding { count, .. } => *count,
        }
    }

    #[must_use]
    pub fn count_or(&self, fallback: usize) -> usize {
        self.count().unwrap_or(fallback)
    }

    #[must_use]
    pub fn is_excluded(&self, id: &SkillId) -> bool {
        match self {
            Self::Count(_) => false,
            Self::Excluding { exclude, .. } => exclude.contains(id),
        }
    }
}

impl Default for SkillSelector {
    fn default() -> Self {
        Self::Count(None)
    }
}

impl From<usize> for SkillSelector {
    fn from(count: usize) -> Self {
        Self::Count(Some(count))
    }
}

/// Registry of skills per hero class.
#[derive(Clone, Debug)]
pub struct SkillCatalog {
    classes: FxHashMap<String, Vec<Skill>>,
    default_offer: usize,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self {
            classes: FxHashMap::default(),
            default_offer: DEFAULT_SKILL_OFFER,
        }
    }
}

impl SkillCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the default offer size from `config`.
    #[must_use]
    pub fn with_rules(self, config: &RulesConfig) -> Self {
        self.with_default_offer(config.default_skill_offer)
    }

    /// Number of skills drawn when the selector gives no count.
    #[must_use]
    pub fn with_default_offer(mut self, count: usize) -> Self {
        self.default_offer = count;
        self
    }

    #[must_use]
    pub fn default_offer(&self) -> usize {
        self.default_offer
    }

    fn normalize(class: &str) -> String {
        class.to_lowercase()
    }

    /// Append a skill to a class list.
    ///
    /// Fails if the class already has a skill with the same id.
    pub fn register(&mut self, class: &str, skill: Skill) -> Result<(), CatalogError> {
        let key = Self::normalize(class);
        let skills = self.classes.entry(key.clone()).or_default();
        if skills.iter().any(|s| s.id == skill.id) {
            return Err(CatalogError::DuplicateSkill {
                class: key,
                skill: skill.id.0,
            });
        }
        skills.push(skill);
        Ok(())
    }

    /// Register several skills for one class.
    pub fn register_all(
        &mut self,
        class: &str,
        skills: impl IntoIterator<Item = Skill>,
    ) -> Result<(), CatalogError> {
        for skill in skills {
            self.register(class, skill)?;
        }
        Ok(())
    }

    /// All skills of a class, in registration order. Empty for unknown classes.
    #[must_use]
    pub fn skills_for(&self, class: &str) -> &[Skill] {
        self.classes
            .get(&Self::normalize(class))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up one skill of a class.
    #[must_use]
    pub fn get(&self, class: &str, id: &SkillId) -> Option<&Skill> {
        self.skills_for(class).iter().find(|s| &s.id == id)
    }

    #[must_use]
    pub fn contains(&self, class: &str, id: &SkillId) -> bool {
        self.get(class, id).is_some()
    }

    /// Iterate over normalized class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Draw random, pairwise distinct skills of a class.
    ///
    /// Excluded skills are removed before sampling. A selector without a
    /// count draws [`SkillCatalog::default_offer`] skills. Asking for more
    /// skills than remain returns all of them. The draw is a partial
    /// Fisher-Yates shuffle, so every subset of the requested size is
    /// equally likely.
    pub fn random_skills(
        &self,
        class: &str,
        selector: impl Into<SkillSelector>,
        rng: &mut dyn RandomSource,
    ) -> Vec<Skill> {
        let selector = selector.into();
        let skills = self.skills_for(class);
        if skills.is_empty() {
            tracing::debug!(class, "skills.catalog.unknown_class");
            return Vec::new();
        }

        let mut pool: Vec<&Skill> = skills
            .iter()
            .filter(|s| !selector.is_excluded(&s.id))
            .collect();
        let requested = selector.count_or(self.default_offer);
        let take = requested.min(pool.len());

        for i in 0..take {
            let remaining = pool.len() - i;
            let j = i + rng.below(remaining) % remaining;
            pool.swap(i, j);
        }
        pool.truncate(take);

        tracing::debug!(
            class,
            class_size = skills.len(),
            requested,
            drawn = take,
            "skills.catalog.sampled"
        );

        pool.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::skills::SkillKind;

    fn small_catalog() -> SkillCatalog {
        let mut catalog = SkillCatalog::new();
        catalog
            .register_all(
                "Mage",
                ["a", "b", "c", "d"]
                    .into_iter()
                    .map(|id| Skill::new(id, id.to_uppercase(), SkillKind::Active)),
            )
            .unwrap();
        catalog
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = small_catalog();
        assert_eq!(catalog.skills_for("MAGE").len(), 4);
        assert_eq!(catalog.skills_for("mage").len(), 4);
        assert!(catalog.contains("mAgE", &SkillId::new("c")));
    }

    #[test]
    fn test_unknown_class_is_empty() {
        let catalog = small_catalog();
        let mut rng = GameRng::new(1);
        assert!(catalog.skills_for("rogue").is_empty());
        assert!(catalog.random_skills("rogue", 5, &mut rng).is_empty());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut catalog = small_catalog();
        let err = catalog
            .register("MAGE", Skill::new("b", "B again", SkillKind::Passive))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSkill {
                class: "mage".to_string(),
                skill: "b".to_string(),
            }
        );
        assert_eq!(catalog.skills_for("mage").len(), 4);
    }

    #[test]
    fn test_selector_defaults() {
        assert_eq!(SkillSelector::default(), SkillSelector::Count(None));
        assert_eq!(SkillSelector::excluding(["x"]).count(), None);
        assert_eq!(SkillSelector::excluding(["x"]).take(5).count(), Some(5));
        assert_eq!(SkillSelector::from(4).take(1), SkillSelector::Count(Some(1)));
        assert_eq!(SkillSelector::default().count_or(3), 3);
    }

    #[test]
    fn test_default_offer_fills_missing_count() {
        let mut rng = GameRng::new(4);

        let catalog = small_catalog();
        assert_eq!(catalog.default_offer(), 2);
        assert_eq!(catalog.random_skills("mage", SkillSelector::default(), &mut rng).len(), 2);

        let catalog = small_catalog().with_rules(&RulesConfig::default().with_default_skill_offer(3));
        assert_eq!(catalog.default_offer(), 3);
        assert_eq!(catalog.random_skills("mage", SkillSelector::default(), &mut rng).len(), 3);
        assert_eq!(
            catalog
                .random_skills("mage", SkillSelector::excluding(["a"]), &mut rng)
                .len(),
            3
        );
        // An explicit count still wins.
        assert_eq!(catalog.random_skills("mage", 1, &mut rng).len(), 1);
    }

    #[test]
    fn test_sample_is_distinct_subset() {
        let catalog = small_catalog();
        let mut rng = GameRng::new(9);

        for _ in 0..50 {
            let drawn = catalog.random_skills("mage", 3, &mut rng);
            assert_eq!(drawn.len(), 3);
            let ids: FxHashSet<_> = drawn.iter().map(|s| s.id.clone()).collect();
            assert_eq!(ids.len(), 3);
            assert!(drawn.iter().all(|s| catalog.contains("mage", &s.id)));
        }
    }

    #[test]
    fn test_oversized_request_returns_everything() {
        let catalog = small_catalog();
        let mut rng = GameRng::new(9);

        let mut drawn: Vec<_> = catalog
            .random_skills("mage", 10, &mut rng)
            .into_iter()
            .map(|s| s.id.0)
            .collect();
        drawn.sort();
        assert_eq!(drawn, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_exclusion_removes_before_sampling() {
        let catalog = small_catalog();
        let mut rng = GameRng::new(5);

        let selector = SkillSelector::excluding(["a", "c"]).take(5);
        let mut drawn: Vec<_> = catalog
            .random_skills("mage", selector, &mut rng)
            .into_iter()
            .map(|s| s.id.0)
            .collect();
        drawn.sort();
        assert_eq!(drawn, vec!["b", "d"]);
    }

    #[test]
    fn test_zero_request_is_empty() {
        let catalog = small_catalog();
        let mut rng = GameRng::new(5);
        assert!(catalog.random_skills("mage", 0, &mut rng).is_empty());
    }

    #[test]
    fn test_sampling_reaches_every_skill() {
        let catalog = small_catalog();
        let mut rng = GameRng::new(21);
        let mut seen = FxHashSet::default();

        for _ in 0..100 {
            for skill in catalog.random_skills("mage", 1, &mut rng) {
                seen.insert(skill.id);
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
