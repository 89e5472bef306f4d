//! Breadth-first search: shallowest node first.

use sextant_kernel::Environment;
use tracing::debug;

use crate::context::RunContext;
use crate::error::SearchError;
use crate::frontier::Order;
use crate::outcome::Outcome;
use crate::policy::ExpansionBudget;
use crate::strategy::{depth_ordered, Strategy};

/// Finds a path with the fewest edges, regardless of edge cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "breadth_first"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let budget = ExpansionBudget::from_context(ctx)?;
        debug!(strategy = self.name(), environment = env.name(), "search started");
        let outcome = depth_ordered::search(env, Order::LowestFirst, None, budget, 0)?
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
