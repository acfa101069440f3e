//! Site handler capability and the registry keyed by site type.
//!
//! Each site type gets one handler. A handler turns a site's current
//! state into a list of options and runs the option the player picked.
//! Handlers read `Site::is_conquered` but never change it.

use rustc_hash::FxHashMap;

use super::context::SiteContext;
use super::option::{ActionResult, OptionId, SiteOptions};
use super::site::{Site, SiteType};
use crate::core::{Hex, RulesConfig, SiteError};
use crate::hero::HeroResources;

/// Per-site-type interaction rules.
pub trait SiteHandler {
    /// The site type this handler serves.
    fn site_type(&self) -> SiteType;

    /// Options for `site` in its current state.
    ///
    /// Only reads the hero. `enabled` flags reflect the hero and
    /// `current_hex` at call time only.
    fn options(
        &self,
        site: &Site,
        hero: &dyn HeroResources,
        current_hex: Option<Hex>,
    ) -> SiteOptions;

    /// Run the option `option` against `site`.
    ///
    /// Expected failures (not enough movement, wrong conquest state) come
    /// back as an unsuccessful [`ActionResult`]. An option id this handler
    /// does not know is an error.
    fn execute(
        &self,
        site: &Site,
        option: &OptionId,
        ctx: &mut SiteContext<'_>,
    ) -> Result<ActionResult, SiteError>;
}

/// Handlers by site type.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: FxHashMap<SiteType, Box<dyn SiteHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in handler.
    #[must_use]
    pub fn standard(config: &RulesConfig) -> Self {
        let mut registry = Self::new();
        registry
            .handlers
            .insert(SiteType::Mine, Box::new(super::mine::MineHandler::new(config)));
        registry
    }

    /// Register a handler for its site type.
    pub fn register(&mut self, handler: Box<dyn SiteHandler>) -> Result<(), SiteError> {
        let site_type = handler.site_type();
        if self.handlers.contains_key(&site_type) {
            return Err(SiteError::DuplicateHandler(site_type));
        }
        self.handlers.insert(site_type, handler);
        Ok(())
    }

    /// Get the handler for a site type.
    pub fn get(&self, site_type: SiteType) -> Result<&dyn SiteHandler, SiteError> {
        self.handlers
            .get(&site_type)
            .map(|handler| &**handler)
            .ok_or(SiteError::NoHandler(site_type))
    }

    #[must_use]
    pub fn contains(&self, site_type: SiteType) -> bool {
        self.handlers.contains_key(&site_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
