//! Error types for contract violations.
//!
//! Running out of movement is not an error: actions report that through
//! `ActionResult`. These enums cover calls that cannot be answered at all,
//! like asking about a site that was never placed.

use thiserror::Error;

use crate::sites::{OptionId, SiteId, SiteType};

/// Errors raised by the site board and handler registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("no site with id {0}")]
    UnknownSite(SiteId),

    #[error("no site ids left on this board")]
    BoardFull,

    #[error("no handler registered for site type {0}")]
    NoHandler(SiteType),

    #[error("a handler for site type {0} is already registered")]
    DuplicateHandler(SiteType),

    #[error("site type {site_type} has no option `{option}`")]
    UnknownOption { site_type: SiteType, option: OptionId },
}

/// Errors raised while building a skill catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("skill `{skill}` is already registered for class `{class}`")]
    DuplicateSkill { class: String, skill: String },
}

/// Errors raised when rules configuration invariants are violated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("elite chance must be between 0 and 1 (got {0:.2})")]
    EliteChanceOutOfRange(f64),

    #[error("default skill offer must be at least 1")]
    ZeroSkillOffer,
}
