//! Depth-first search with a depth cutoff.

use sextant_kernel::Environment;
use tracing::debug;

use crate::context::RunContext;
use crate::error::SearchError;
use crate::frontier::Order;
use crate::outcome::Outcome;
use crate::policy::DepthLimitedParams;
use crate::strategy::{depth_ordered, Strategy};

/// Depth-first search that never queues a node at depth `>= depth_limit`.
///
/// Requires the `depth_limit` parameter. Children cut off by the limit are
/// recorded in the tree but never queued, so never expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthLimited;

impl Strategy for DepthLimited {
    fn name(&self) -> &'static str {
        "depth_limited"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let params = DepthLimitedParams::from_context(ctx)?;
        debug!(
            strategy = self.name(),
            environment = env.name(),
            depth_limit = params.depth_limit,
            "search started"
        );
        let outcome = depth_ordered::search(
            env,
            Order::HighestFirst,
            Some(params.depth_limit),
            params.budget,
            0,
        )?
        .into_outcome(self.name())?;
        debug!(
            strategy = self.name(),
            iterations = outcome.iterations(),
            cost = outcome.total_cost(),
            "goal reached"
        );
        Ok(outcome)
    }
}
