//! Name-to-strategy lookup.
//!
//! An explicit value built by the caller at startup; the engine holds no
//! process-wide registry.

use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::strategy::{
    AStar, BreadthFirst, DepthFirst, DepthLimited, GreedyBestFirst, IterativeDeepening,
    RecursiveBestFirst, SmaStar, Strategy, UniformCost,
};

/// Strategies keyed by their [`Strategy::name`].
pub struct StrategyRegistry {
    strategies: BTreeMap<&'static str, Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// A registry with no strategies.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            strategies: BTreeMap::new(),
        }
    }

    /// A registry holding all nine built-in strategies.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(AStar));
        registry.register(Box::new(SmaStar));
        registry.register(Box::new(GreedyBestFirst));
        registry.register(Box::new(BreadthFirst));
        registry.register(Box::new(DepthFirst));
        registry.register(Box::new(UniformCost));
        registry.register(Box::new(DepthLimited));
        registry.register(Box::new(IterativeDeepening));
        registry.register(Box::new(RecursiveBestFirst));
        registry
    }

    /// Add `strategy` under its own name, returning any strategy it
    /// replaces.
    pub fn register(&mut self, strategy: Box<dyn Strategy>) -> Option<Box<dyn Strategy>> {
        self.strategies.insert(strategy.name(), strategy)
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.strategies.keys().copied().collect()
    }

    /// Look up a strategy by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownStrategy`] listing the known names if
    /// `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&dyn Strategy, RegistryError> {
        self.strategies
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| RegistryError::UnknownStrategy {
                name: name.to_string(),
                known: self.list().into_iter().map(str::to_string).collect(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.strategies.keys()).finish()
    }
}
