//! Harness runner: resolve a strategy by name, run it, and package the
//! result.
//!
//! # Pipeline
//!
//! ```text
//! registry.get(name) → strategy.run(ctx, env) → SearchReport::from_outcome
//!   → canonical_bytes() → digest()
//! ```

use serde_json::json;
use tracing::info;

use sextant_kernel::{Cost, Environment};
use sextant_search::{Outcome, RunContext, StrategyRegistry};

use crate::digest::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};
use crate::error::RunError;

/// What a successful run reports: the path, its cost, and the search effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: String,
    pub environment: String,
    /// Node names from start to goal.
    pub path: Vec<String>,
    pub steps: usize,
    pub total_cost: Cost,
    pub iterations: u64,
    pub nodes_generated: usize,
    pub frontier_high_water: usize,
}

impl SearchReport {
    #[must_use]
    pub fn from_outcome(outcome: &Outcome, environment: &str) -> Self {
        let stats = outcome.stats();
        Self {
            strategy: outcome.strategy().to_string(),
            environment: environment.to_string(),
            path: outcome.path().into_iter().map(str::to_string).collect(),
            steps: outcome.steps(),
            total_cost: outcome.total_cost(),
            iterations: outcome.iterations(),
            nodes_generated: stats.nodes_generated,
            frontier_high_water: stats.frontier_high_water,
        }
    }

    /// JSON form of the report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "environment": self.environment,
            "frontier_high_water": self.frontier_high_water,
            "iterations": self.iterations,
            "nodes_generated": self.nodes_generated,
            "path": self.path,
            "steps": self.steps,
            "strategy": self.strategy,
            "total_cost": self.total_cost,
        })
    }

    /// Compact JSON bytes with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] if serialization fails.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, RunError> {
        serde_json::to_vec(&self.to_json()).map_err(|e| RunError::Canon {
            detail: e.to_string(),
        })
    }

    /// Domain-separated digest of [`SearchReport::canonical_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, RunError> {
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &self.canonical_bytes()?))
    }
}

/// Run the strategy registered as `strategy` against `env`.
///
/// # Errors
///
/// Returns [`RunError::Registry`] for an unknown strategy name and
/// [`RunError::Search`] when the strategy fails.
pub fn run_search(
    registry: &StrategyRegistry,
    strategy: &str,
    ctx: &RunContext,
    env: &dyn Environment,
) -> Result<SearchReport, RunError> {
    let runner = registry.get(strategy)?;
    let outcome = runner.run(ctx, env).map_err(|source| RunError::Search {
        strategy: strategy.to_string(),
        environment: env.name().to_string(),
        source,
    })?;
    let report = SearchReport::from_outcome(&outcome, env.name());
    info!(
        strategy = %report.strategy,
        environment = %report.environment,
        steps = report.steps,
        total_cost = report.total_cost,
        iterations = report.iterations,
        "search finished"
    );
    Ok(report)
}
