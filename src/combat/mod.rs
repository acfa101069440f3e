//! Combat boundary: enemy templates and the fight request/outcome contract.
//!
//! Combat math lives in the host's combat engine. This module only
//! describes what is handed over and what comes back.

mod boundary;
mod enemy;

pub use boundary::{CombatBoundary, CombatOutcome, CombatRequest, CombatResult, PendingCombats};
pub use enemy::{EnemyArchetype, EnemyType, Resistances};
