//! Axial hex coordinates and projection to screen space.
//!
//! The subsystem never draws anything. It only needs to turn the hex a
//! hero stands on into a pixel position when it asks the host for a
//! visual cue, so projection is a trait the host can supply.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    /// Create a hex from axial coordinates.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// A point in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Converts axial coordinates to pixel coordinates.
pub trait CoordinateProjection {
    fn project(&self, hex: Hex) -> PixelPoint;
}

/// Pointy-top hex layout.
///
/// `size` is the distance from a hex center to any corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointyHexProjection {
    pub size: f64,
    pub origin: PixelPoint,
}

impl PointyHexProjection {
    #[must_use]
    pub const fn new(size: f64, origin: PixelPoint) -> Self {
        Self { size, origin }
    }
}

impl Default for PointyHexProjection {
    fn default() -> Self {
        Self::new(40.0, PixelPoint::default())
    }
}

impl CoordinateProjection for PointyHexProjection {
    fn project(&self, hex: Hex) -> PixelPoint {
        let q = f64::from(hex.q);
        let r = f64::from(hex.r);
        let sqrt3 = 3f64.sqrt();
        PixelPoint {
            x: self.origin.x + self.size * sqrt3 * (q + r / 2.0),
            y: self.origin.y + self.size * 1.5 * r,
        }
    }
}
