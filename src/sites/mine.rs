//! Mine sites: fight for them, then mine crystals from them.
//!
//! | State       | Option            | Enabled when        |
//! |-------------|-------------------|---------------------|
//! | Unconquered | `conquer_mine`    | always              |
//! | Conquered   | `collect_crystal` | movement points ≥ 1 |

use smallvec::smallvec;

use super::context::SiteContext;
use super::encounter::EncounterGenerator;
use super::handler::SiteHandler;
use super::option::{ActionResult, OptionId, SiteOption, SiteOptions};
use super::site::{Site, SiteType};
use crate::combat::CombatRequest;
use crate::core::{Hex, LogLevel, RulesConfig, SiteError};
use crate::hero::{Crystal, HeroResources};

/// Attack an unconquered mine.
pub const CONQUER_MINE: OptionId = OptionId::from_static("conquer_mine");

/// Mine a crystal from a conquered mine.
pub const COLLECT_CRYSTAL: OptionId = OptionId::from_static("collect_crystal");

/// Movement spent per crystal.
pub const MINE_COLLECT_COST: u32 = 1;

/// Handler for [`SiteType::Mine`].
#[derive(Clone, Debug)]
pub struct MineHandler {
    encounters: EncounterGenerator,
}

impl MineHandler {
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            encounters: EncounterGenerator::for_mine(config),
        }
    }

    #[must_use]
    pub fn encounters(&self) -> &EncounterGenerator {
        &self.encounters
    }

    /// Start a fight for `site`.
    ///
    /// Always succeeds at the trigger level. The combat engine decides the
    /// fight and reports back; this handler never conquers the mine.
    pub fn attack_mine(&self, site: &Site, ctx: &mut SiteContext<'_>) -> ActionResult {
        let enemy = self.encounters.roll(&mut *ctx.rng).clone();

        ctx.log.log(
            &format!("{} stellt sich dir in den Weg!", enemy.name),
            LogLevel::Warning,
        );
        tracing::debug!(
            site = %site.id,
            enemy = %enemy.name,
            enemy_type = %enemy.enemy_type,
            "mine.attack.combat_requested"
        );
        ctx.combat.initiate_combat(CombatRequest {
            site: site.id,
            enemy,
        });

        ActionResult::ok("Angriff auf Mine!")
    }

    /// Mine one crystal of a random color for one movement point.
    pub fn collect_mine_crystal(&self, ctx: &mut SiteContext<'_>) -> ActionResult {
        let Some(hex) = ctx.current_hex else {
            return ActionResult::fail("Kein Feld ausgewählt.");
        };
        if !ctx.hero.spend_movement(MINE_COLLECT_COST) {
            return ActionResult::fail("Zu wenig Bewegung.");
        }

        let color = Crystal::random(&mut *ctx.rng);
        ctx.hero.gain_crystal(color);

        let message = format!("Kristall erhalten: {color}");
        ctx.log.log(&message, LogLevel::Success);
        tracing::debug!(
            hex = %hex,
            color = color.label(),
            movement_left = ctx.hero.movement_points(),
            "mine.collect.crystal"
        );

        ctx.buff_effect(hex, color);

        ActionResult::ok(message)
    }
}

impl SiteHandler for MineHandler {
    fn site_type(&self) -> SiteType {
        SiteType::Mine
    }

    fn options(
        &self,
        site: &Site,
        hero: &dyn HeroResources,
        _current_hex: Option<Hex>,
    ) -> SiteOptions {
        if site.is_conquered() {
            let enabled = hero.movement_points() >= MINE_COLLECT_COST;
            smallvec![SiteOption::new(
                COLLECT_CRYSTAL,
                "Kristall abbauen (1 Bewegung)",
                enabled,
            )]
        } else {
            smallvec![SiteOption::new(CONQUER_MINE, "Mine erobern (Kampf)", true)]
        }
    }

    fn execute(
        &self,
        site: &Site,
        option: &OptionId,
        ctx: &mut SiteContext<'_>,
    ) -> Result<ActionResult, SiteError> {
        if *option == CONQUER_MINE {
            if site.is_conquered() {
                return Ok(ActionResult::fail("Die Mine ist bereits erobert."));
            }
            Ok(self.attack_mine(site, ctx))
        } else if *option == COLLECT_CRYSTAL {
            if !site.is_conquered() {
                return Ok(ActionResult::fail("Die Mine ist noch nicht erobert."));
            }
            Ok(self.collect_mine_crystal(ctx))
        } else {
            Err(SiteError::UnknownOption {
                site_type: SiteType::Mine,
                option: option.clone(),
            })
        }
    }
}
