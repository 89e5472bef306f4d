//! Uniform-cost search: cheapest accumulated path cost first.

use std::collections::HashMap;

use sextant_kernel::{Cost, Environment, SearchTree};
use tracing::debug;

use crate::context::RunContext;
use crate::error::SearchError;
use crate::frontier::{Order, PriorityFrontier};
use crate::outcome::Outcome;
use crate::policy::ExpansionBudget;
use crate::strategy::Strategy;

/// Cost-optimal for non-negative edge costs; ignores the heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl Strategy for UniformCost {
    fn name(&self) -> &'static str {
        "uniform_cost"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let budget = ExpansionBudget::from_context(ctx)?;
        debug!(strategy = self.name(), environment = env.name(), "search started");

        let mut tree = SearchTree::new(env.start());
        let mut cost: HashMap<String, Cost> = HashMap::new();
        let mut frontier = PriorityFrontier::new(Order::LowestFirst);
        let root = tree.root();
        cost.insert(tree.name(root).to_string(), tree.path_cost(root));
        let pushed = frontier.push(tree.name(root), root, &cost);
        debug_assert!(pushed, "empty frontier rejected the root");

        let mut iterations = 0;
        while !frontier.is_empty() {
            budget.admit(iterations)?;
            let Some(current) = frontier.pop(&cost) else {
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
                let candidate = tree.path_cost(child);
                if cost.get(name).is_some_and(|&known| known <= candidate) {
                    continue;
                }
                cost.insert(name.to_string(), candidate);
                if !frontier.replace(name, child, &cost) {
                    let pushed = frontier.push(name, child, &cost);
                    debug_assert!(pushed, "push after failed replace");
                }
            }
        }

        Err(SearchError::Exhausted { iterations })
    }
}
