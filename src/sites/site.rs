//! Map sites and their conquest state.

use serde::{Deserialize, Serialize};

use crate::core::Hex;

/// Unique identifier for a site on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteId(pub u32);

impl SiteId {
    /// Create a new site ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Site({})", self.0)
    }
}

/// Site type tag. Handlers are registered per tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteType {
    Mine,
    Village,
    Monastery,
    Keep,
    MageTower,
}

impl SiteType {
    /// Player-facing name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SiteType::Mine => "Mine",
            SiteType::Village => "Dorf",
            SiteType::Monastery => "Kloster",
            SiteType::Keep => "Burg",
            SiteType::MageTower => "Magierturm",
        }
    }
}

impl std::fmt::Display for SiteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            SiteType::Mine => "mine",
            SiteType::Village => "village",
            SiteType::Monastery => "monastery",
            SiteType::Keep => "keep",
            SiteType::MageTower => "mage_tower",
        };
        f.write_str(tag)
    }
}

/// A map location with a conquest state.
///
/// `conquered` starts `false` and can only ever become `true`, through
/// [`Site::mark_conquered`]. Site handlers never call it; the board does
/// when the combat engine reports a victory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub site_type: SiteType,
    pub hex: Hex,
    conquered: bool,
}

impl Site {
    /// Create an unconquered site.
    #[must_use]
    pub fn new(id: SiteId, site_type: SiteType, hex: Hex) -> Self {
        Self {
            id,
            site_type,
            hex,
            conquered: false,
        }
    }

    #[must_use]
    pub fn is_conquered(&self) -> bool {
        self.conquered
    }

    /// Flip to conquered.
    ///
    /// Returns `true` if this call performed the transition, `false` if
    /// the site was already conquered.
    pub fn mark_conquered(&mut self) -> bool {
        if self.conquered {
            return false;
        }
        self.conquered = true;
        true
    }
}
