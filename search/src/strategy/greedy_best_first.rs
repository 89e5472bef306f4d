//! Greedy best-first search: lowest heuristic first.

use std::collections::HashMap;

use sextant_kernel::{Cost, Environment, SearchTree};
use tracing::debug;

use crate::context::RunContext;
use crate::error::SearchError;
use crate::frontier::{Order, PriorityFrontier};
use crate::outcome::Outcome;
use crate::policy::ExpansionBudget;
use crate::strategy::Strategy;

/// Orders the frontier by `heuristic()` alone.
///
/// Each state is queued the first time it is seen and never revised, so the
/// path found is not necessarily the cheapest or the shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBestFirst;

impl Strategy for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "greedy_best_first"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let budget = ExpansionBudget::from_context(ctx)?;
        debug!(strategy = self.name(), environment = env.name(), "search started");

        let mut tree = SearchTree::new(env.start());
        let mut heuristic: HashMap<String, Cost> = HashMap::new();
        let mut frontier = PriorityFrontier::new(Order::LowestFirst);
        let root = tree.root();
        heuristic.insert(tree.name(root).to_string(), tree.heuristic(root));
        let pushed = frontier.push(tree.name(root), root, &heuristic);
        debug_assert!(pushed, "empty frontier rejected the root");

        let mut iterations = 0;
        while !frontier.is_empty() {
            budget.admit(iterations)?;
            let Some(current) = frontier.pop(&heuristic) else {
                break;
            };
            iterations += 1;

            if env.is_goal(tree.state(current)) {
                debug!(
                    strategy = self.name(),
                    iterations,
                    cost = tree.path_cost(current),
                    "goal reached"
                );
                return Ok(Outcome::new(
                    self.name(),
                    tree,
                    current,
                    iterations,
                    frontier.high_water(),
                ));
            }

            for child in tree.expand(current) {
                let name = tree.name(child);
                if heuristic.contains_key(name) {
                    continue;
                }
                heuristic.insert(name.to_string(), tree.heuristic(child));
                let pushed = frontier.push(name, child, &heuristic);
                debug_assert!(pushed, "unseen state already queued");
            }
        }

        Err(SearchError::Exhausted { iterations })
    }
}
