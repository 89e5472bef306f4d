//! Depth-first search: deepest node first.

use sextant_kernel::Environment;
use tracing::debug;

use crate::context::RunContext;
use crate::error::SearchError;
use crate::frontier::Order;
use crate::outcome::Outcome;
use crate::policy::ExpansionBudget;
use crate::strategy::{depth_ordered, Strategy};

/// Complete on finite spaces; neither cost- nor step-optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl Strategy for DepthFirst {
    fn name(&self) -> &'static str {
        "depth_first"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let budget = ExpansionBudget::from_context(ctx)?;
        debug!(strategy = self.name(), environment = env.name(), "search started");
        let outcome = depth_ordered::search(env, Order::HighestFirst, None, budget, 0)?
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
