//! Core building blocks: randomness, hex geometry, narrative log,
//! configuration and errors.
//!
//! Nothing here knows about mines or skills; the other modules build on
//! these collaborators.

pub mod config;
pub mod error;
pub mod hex;
pub mod log;
pub mod rng;

pub use config::{RulesConfig, DEFAULT_ELITE_CHANCE, DEFAULT_SKILL_OFFER};
pub use error::{CatalogError, ConfigError, SiteError};
pub use hex::{CoordinateProjection, Hex, PixelPoint, PointyHexProjection};
pub use log::{GameLog, LogEntry, LogLevel, MessageLog, TracingLog};
pub use rng::{GameRng, GameRngState, RandomSource};
