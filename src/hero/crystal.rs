//! Crystal resource tokens.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// One of the four crystal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crystal {
    Red,
    Green,
    Blue,
    White,
}

impl Crystal {
    /// The fixed palette, in inventory order.
    pub const PALETTE: [Crystal; 4] = [Crystal::Red, Crystal::Green, Crystal::Blue, Crystal::White];

    /// Pick a color uniformly from the palette.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let len = Self::PALETTE.len();
        Self::PALETTE[rng.below(len) % len]
    }

    /// Player-facing name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Crystal::Red => "Rot",
            Crystal::Green => "Grün",
            Crystal::Blue => "Blau",
            Crystal::White => "Weiß",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Crystal::Red => 0,
            Crystal::Green => 1,
            Crystal::Blue => 2,
            Crystal::White => 3,
        }
    }
}

impl std::fmt::Display for Crystal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-color crystal counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrystalInventory {
    counts: [u32; 4],
}

impl CrystalInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one crystal of `color`.
    pub fn add(&mut self, color: Crystal) {
        self.counts[color.slot()] = self.counts[color.slot()].saturating_add(1);
    }

    #[must_use]
    pub fn count(&self, color: Crystal) -> u32 {
        self.counts[color.slot()]
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate over (color, count) pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Crystal, u32)> + '_ {
        Crystal::PALETTE.iter().map(move |&c| (c, self.count(c)))
    }
}
