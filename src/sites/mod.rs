//! Site interaction: conquest state, per-type handlers, encounters.
//!
//! ## Key Types
//!
//! - [`Site`]: A map location with a monotonic `conquered` flag
//! - [`SiteHandler`]: Options and actions for one site type
//! - [`HandlerRegistry`]: Handlers keyed by [`SiteType`]
//! - [`SiteBoard`]: Placed sites, option dispatch, combat outcomes
//! - [`SiteContext`]: Collaborators one action may use
//!
//! ## Flow
//!
//! 1. The host asks the board for a site's options.
//! 2. The player picks one; the board runs it through the site's handler.
//! 3. Attacks hand a [`CombatRequest`](crate::combat::CombatRequest) to the
//!    combat engine, whose [`CombatOutcome`](crate::combat::CombatOutcome)
//!    comes back through [`SiteBoard::resolve_combat`].

mod board;
mod context;
mod encounter;
mod handler;
mod mine;
mod option;
mod site;

pub use board::SiteBoard;
pub use context::{SiteContext, VisualFeedback};
pub use encounter::EncounterGenerator;
pub use handler::{HandlerRegistry, SiteHandler};
pub use mine::{MineHandler, COLLECT_CRYSTAL, CONQUER_MINE, MINE_COLLECT_COST};
pub use option::{ActionResult, OptionId, SiteOption, SiteOptions};
pub use site::{Site, SiteId, SiteType};
