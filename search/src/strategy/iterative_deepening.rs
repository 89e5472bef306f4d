//! Iterative deepening: depth-limited search with a growing limit.

use sextant_kernel::Environment;
use tracing::{debug, trace};

use crate::context::RunContext;
use crate::error::SearchError;
use crate::frontier::Order;
use crate::outcome::Outcome;
use crate::policy::IterativeDeepeningParams;
use crate::strategy::{depth_ordered, Strategy};

/// Runs depth-limited search with limits `initial_depth`, `initial_depth + 1`,
/// ... until one attempt reaches the goal.
///
/// Expansions are summed over every attempt and share one budget. Stops
/// with [`SearchError::MaxDepthExceeded`] once the limit reaches
/// `max_depth`, and with [`SearchError::Exhausted`] as soon as an attempt
/// explores the whole space without being cut off.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeDeepening;

impl Strategy for IterativeDeepening {
    fn name(&self) -> &'static str {
        "iterative_deepening"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let params = IterativeDeepeningParams::from_context(ctx)?;
        debug!(
            strategy = self.name(),
            environment = env.name(),
            initial_depth = params.initial_depth,
            max_depth = ?params.max_depth,
            "search started"
        );

        let mut iterations = 0;
        let mut depth_limit = params.initial_depth;
        loop {
            if let Some(max_depth) = params.max_depth {
                if depth_limit >= max_depth {
                    return Err(SearchError::MaxDepthExceeded {
                        max_depth,
                        iterations,
                    });
                }
            }

            let attempt = depth_ordered::search(
                env,
                Order::HighestFirst,
                Some(depth_limit),
                params.budget,
                iterations,
            )?;
            iterations += attempt.iterations;
            trace!(depth_limit, attempt_iterations = attempt.iterations, "attempt finished");

            if let Some(goal) = attempt.goal {
                let outcome = Outcome::new(
                    self.name(),
                    attempt.tree,
                    goal,
                    iterations,
                    attempt.frontier_high_water,
                );
                debug!(
                    strategy = self.name(),
                    iterations,
                    depth_limit,
                    cost = outcome.total_cost(),
                    "goal reached"
                );
                return Ok(outcome);
            }
            if !attempt.cutoff_hit {
                return Err(SearchError::Exhausted { iterations });
            }
            depth_limit += 1;
        }
    }
}
