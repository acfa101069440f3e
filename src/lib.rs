//! # site-encounter
//!
//! Site interaction and encounter resolution for a hex-grid, turn-based
//! strategy game.
//!
//! ## Design Principles
//!
//! 1. **Injected collaborators**: Hero, log, combat engine, coordinate
//!    projection and visual feedback are traits. Randomness is a
//!    [`RandomSource`] passed in, never a global.
//!
//! 2. **Explicit state machine**: A site is either unconquered or
//!    conquered. Handlers read the flag; only a combat outcome reported to
//!    the [`SiteBoard`] flips it, and only once.
//!
//! 3. **Failures as values**: Running out of movement is an
//!    [`ActionResult`] with `success: false`, not an error.
//!
//! ## Modules
//!
//! - `core`: RNG, hex geometry, narrative log, configuration, errors
//! - `hero`: Crystals, movement, fame, learned skills
//! - `skills`: Skill definitions, per-class catalog, random offers
//! - `combat`: Enemy archetypes and the combat request/outcome contract
//! - `sites`: Sites, handlers, encounter generation, the board

pub mod combat;
pub mod core;
pub mod hero;
pub mod sites;
pub mod skills;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, ConfigError, CoordinateProjection, GameLog, GameRng, GameRngState, Hex,
    LogEntry, LogLevel, MessageLog, PixelPoint, PointyHexProjection, RandomSource, RulesConfig,
    SiteError, TracingLog,
};

pub use crate::hero::{Crystal, CrystalInventory, Hero, HeroResources};

pub use crate::skills::{Skill, SkillCatalog, SkillId, SkillKind, SkillSelector};

pub use crate::combat::{
    CombatBoundary, CombatOutcome, CombatRequest, CombatResult, EnemyArchetype, EnemyType,
    PendingCombats, Resistances,
};

pub use crate::sites::{
    ActionResult, EncounterGenerator, HandlerRegistry, MineHandler, OptionId, Site, SiteBoard,
    SiteContext, SiteHandler, SiteId, SiteOption, SiteOptions, SiteType, VisualFeedback,
    COLLECT_CRYSTAL, CONQUER_MINE,
};
