//! Hero resources: crystals, movement, fame and learned skills.

mod crystal;
#[allow(clippy::module_inception)]
mod hero;

pub use crystal::{Crystal, CrystalInventory};
pub use hero::{Hero, HeroResources};
