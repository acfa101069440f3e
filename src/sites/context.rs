//! Collaborators available to a site action.

use crate::combat::CombatBoundary;
use crate::core::{CoordinateProjection, GameLog, Hex, PixelPoint, RandomSource};
use crate::hero::{Crystal, HeroResources};

/// Optional visual cue sink (particles, flashes).
///
/// Best effort: handlers ignore whatever happens on the other side.
pub trait VisualFeedback {
    fn buff_effect(&mut self, at: PixelPoint, color: Crystal);
}

/// Everything one site action may read or mutate.
///
/// The context borrows the hero and services exclusively for the
/// duration of an action, so two actions can never interleave.
///
/// ## Example
///
/// ```
/// use site_encounter::combat::PendingCombats;
/// use site_encounter::core::{GameRng, Hex, MessageLog, PointyHexProjection};
/// use site_encounter::hero::Hero;
/// use site_encounter::sites::SiteContext;
///
/// let mut hero = Hero::new("GOLDYX").with_movement(2);
/// let mut rng = GameRng::new(1);
/// let mut log = MessageLog::new();
/// let mut combat = PendingCombats::new();
/// let projection = PointyHexProjection::default();
///
/// let ctx = SiteContext::new(&mut hero, &mut rng, &mut log, &mut combat, &projection)
///     .at(Hex::new(0, 1));
/// assert_eq!(ctx.current_hex, Some(Hex::new(0, 1)));
/// assert!(!ctx.has_feedback());
/// ```
pub struct SiteContext<'a> {
    pub hero: &'a mut dyn HeroResources,
    pub rng: &'a mut dyn RandomSource,
    pub log: &'a mut dyn GameLog,
    pub combat: &'a mut dyn CombatBoundary,
    pub projection: &'a dyn CoordinateProjection,
    pub feedback: Option<&'a mut dyn VisualFeedback>,
    /// Hex the hero is acting from.
    pub current_hex: Option<Hex>,
}

impl<'a> SiteContext<'a> {
    /// Create a context without visual feedback or a current hex.
    pub fn new(
        hero: &'a mut dyn HeroResources,
        rng: &'a mut dyn RandomSource,
        log: &'a mut dyn GameLog,
        combat: &'a mut dyn CombatBoundary,
        projection: &'a dyn CoordinateProjection,
    ) -> Self {
        Self {
            hero,
            rng,
            log,
            combat,
            projection,
            feedback: None,
            current_hex: None,
        }
    }

    /// Attach a visual feedback sink.
    #[must_use]
    pub fn with_feedback(mut self, feedback: &'a mut dyn VisualFeedback) -> Self {
        self.feedback = Some(feedback);
        self
    }

    /// Set the hex the hero acts from.
    #[must_use]
    pub fn at(mut self, hex: Hex) -> Self {
        self.current_hex = Some(hex);
        self
    }

    #[must_use]
    pub fn has_feedback(&self) -> bool {
        self.feedback.is_some()
    }

    /// Send a visual cue at `hex`, if a feedback sink is attached.
    pub fn buff_effect(&mut self, hex: Hex, color: Crystal) {
        if let Some(feedback) = self.feedback.as_mut() {
            let at = self.projection.project(hex);
            feedback.buff_effect(at, color);
        }
    }
}
