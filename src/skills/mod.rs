//! Skill system: definitions, per-class catalog, and random offers.
//!
//! ## Key Types
//!
//! - `Skill`: Immutable ability entry (passive or active)
//! - `SkillCatalog`: Class → ordered skill list, case-insensitive lookup
//! - `SkillSelector`: How many skills to draw and which to leave out

mod catalog;
mod skill;
mod standard;

pub use catalog::{SkillCatalog, SkillSelector};
pub use skill::{Skill, SkillId, SkillKind};
