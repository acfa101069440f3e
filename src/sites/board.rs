//! The site board: placed sites plus the handlers that serve them.
//!
//! The board is the single place where a site's conquest state changes.
//! Handlers start fights; the combat engine later reports a
//! [`CombatOutcome`] and [`SiteBoard::resolve_combat`] applies it.

use im::OrdMap;

use super::context::SiteContext;
use super::handler::HandlerRegistry;
use super::option::{ActionResult, OptionId, SiteOptions};
use super::site::{Site, SiteId, SiteType};
use crate::combat::{CombatOutcome, CombatResult};
use crate::core::{GameLog, Hex, LogLevel, RulesConfig, SiteError};
use crate::hero::HeroResources;

/// Sites on the map and their handlers.
///
/// ## Example
///
/// ```
/// use site_encounter::combat::{CombatOutcome, PendingCombats};
/// use site_encounter::core::{GameRng, Hex, MessageLog, PointyHexProjection, RulesConfig};
/// use site_encounter::hero::Hero;
/// use site_encounter::sites::{SiteBoard, SiteContext, SiteType, CONQUER_MINE};
///
/// let mut board = SiteBoard::standard(&RulesConfig::default());
/// let mine = board.add_site(SiteType::Mine, Hex::new(1, 0)).unwrap();
///
/// let mut hero = Hero::new("GOLDYX").with_movement(3);
/// let mut rng = GameRng::new(7);
/// let mut log = MessageLog::new();
/// let mut combat = PendingCombats::new();
/// let projection = PointyHexProjection::default();
///
/// let mut ctx = SiteContext::new(&mut hero, &mut rng, &mut log, &mut combat, &projection)
///     .at(Hex::new(1, 0));
/// let result = board.execute(mine, &CONQUER_MINE, &mut ctx).unwrap();
/// assert!(result.success);
/// drop(ctx);
///
/// // The combat engine reports a win later.
/// let request = combat.drain().next().unwrap();
/// board.resolve_combat(&CombatOutcome::victory(request), &mut hero, &mut log).unwrap();
/// assert!(board.site(mine).unwrap().is_conquered());
/// ```
#[derive(Debug)]
pub struct SiteBoard {
    sites: OrdMap<SiteId, Site>,
    handlers: HandlerRegistry,
    next_id: u32,
}

impl SiteBoard {
    /// Create an empty board served by `handlers`.
    #[must_use]
    pub fn new(handlers: HandlerRegistry) -> Self {
        Self {
            sites: OrdMap::new(),
            handlers,
            next_id: 0,
        }
    }

    /// Empty board with the built-in handlers.
    #[must_use]
    pub fn standard(config: &RulesConfig) -> Self {
        Self::new(HandlerRegistry::standard(config))
    }

    #[must_use]
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Place a new, unconquered site. Returns the assigned ID.
    ///
    /// Fails with [`SiteError::BoardFull`] once every `u32` ID is taken.
    pub fn add_site(&mut self, site_type: SiteType, hex: Hex) -> Result<SiteId, SiteError> {
        let next = self.next_id.checked_add(1).ok_or(SiteError::BoardFull)?;
        let id = SiteId::new(self.next_id);
        self.next_id = next;
        self.sites.insert(id, Site::new(id, site_type, hex));
        tracing::debug!(site = %id, site_type = %site_type, hex = %hex, "board.site.added");
        Ok(id)
    }

    #[must_use]
    pub fn site(&self, id: SiteId) -> Option<&Site> {
        self.sites.get(&id)
    }

    /// Iterate over sites in ID order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    /// Sites located on `hex`.
    pub fn sites_at(&self, hex: Hex) -> impl Iterator<Item = &Site> {
        self.sites.values().filter(move |s| s.hex == hex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Cheap copy of all sites, e.g. for an undo stack.
    #[must_use]
    pub fn snapshot(&self) -> OrdMap<SiteId, Site> {
        self.sites.clone()
    }

    fn get_site(&self, id: SiteId) -> Result<&Site, SiteError> {
        self.sites.get(&id).ok_or(SiteError::UnknownSite(id))
    }

    /// Options for a site in its current state.
    ///
    /// The list is a snapshot; ask again after any state change.
    pub fn options(
        &self,
        id: SiteId,
        hero: &dyn HeroResources,
        current_hex: Option<Hex>,
    ) -> Result<SiteOptions, SiteError> {
        let site = self.get_site(id)?;
        let handler = self.handlers.get(site.site_type)?;
        let options = handler.options(site, hero, current_hex);
        tracing::debug!(
            site = %id,
            conquered = site.is_conquered(),
            count = options.len(),
            "board.options.generated"
        );
        Ok(options)
    }

    /// Run an option against a site.
    pub fn execute(
        &self,
        id: SiteId,
        option: &OptionId,
        ctx: &mut SiteContext<'_>,
    ) -> Result<ActionResult, SiteError> {
        let site = self.get_site(id)?;
        let handler = self.handlers.get(site.site_type)?;
        let result = handler.execute(site, option, ctx)?;
        tracing::debug!(
            site = %id,
            option = %option,
            success = result.success,
            "board.option.executed"
        );
        Ok(result)
    }

    /// Apply a combat outcome reported by the combat engine.
    ///
    /// A victory conquers the site and awards the enemy's fame. Victories
    /// against an already conquered site change nothing. Returns whether
    /// the site changed state.
    pub fn resolve_combat(
        &mut self,
        outcome: &CombatOutcome,
        hero: &mut dyn HeroResources,
        log: &mut dyn GameLog,
    ) -> Result<bool, SiteError> {
        let site = self
            .sites
            .get_mut(&outcome.site)
            .ok_or(SiteError::UnknownSite(outcome.site))?;
        let label = site.site_type.label();

        let transitioned = match outcome.result {
            CombatResult::Victory => {
                let transitioned = site.mark_conquered();
                if transitioned {
                    hero.gain_fame(outcome.enemy.fame);
                    log.log(
                        &format!("{label} erobert! +{} Ruhm", outcome.enemy.fame),
                        LogLevel::Success,
                    );
                }
                transitioned
            }
            CombatResult::Defeat => {
                log.log(
                    &format!("Der Angriff auf {label} ist gescheitert."),
                    LogLevel::Info,
                );
                false
            }
            CombatResult::Retreat => {
                log.log(&format!("Rückzug von {label}."), LogLevel::Info);
                false
            }
        };

        tracing::debug!(
            site = %outcome.site,
            result = ?outcome.result,
            transitioned,
            "board.combat.resolved"
        );
        Ok(transitioned)
    }
}
