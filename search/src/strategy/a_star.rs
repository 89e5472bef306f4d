//! A* search: lowest `cost + heuristic` first.

use std::collections::HashMap;

use sextant_kernel::{Cost, Environment, SearchTree};
use tracing::debug;

use crate::context::RunContext;
use crate::error::SearchError;
use crate::frontier::{Order, PriorityFrontier};
use crate::outcome::Outcome;
use crate::policy::ExpansionBudget;
use crate::strategy::Strategy;

/// Cost-optimal given an admissible heuristic and non-negative edge costs.
///
/// Keeps the best known path cost `g` and `f = g + h` per state. When a
/// cheaper path to a queued state is found, the queued node is replaced in
/// place so the final path follows the cheaper parent chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Strategy for AStar {
    fn name(&self) -> &'static str {
        "a*"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let budget = ExpansionBudget::from_context(ctx)?;
        debug!(strategy = self.name(), environment = env.name(), "search started");

        let mut tree = SearchTree::new(env.start());
        let mut cost: HashMap<String, Cost> = HashMap::new();
        let mut f_cost: HashMap<String, Cost> = HashMap::new();
        let mut frontier = PriorityFrontier::new(Order::LowestFirst);
        let root = tree.root();
        let root_name = tree.name(root).to_string();
        cost.insert(root_name.clone(), tree.path_cost(root));
        f_cost.insert(
            root_name.clone(),
            tree.path_cost(root).saturating_add(tree.heuristic(root)),
        );
        let pushed = frontier.push(&root_name, root, &f_cost);
        debug_assert!(pushed, "empty frontier rejected the root");

        let mut iterations = 0;
        while !frontier.is_empty() {
            budget.admit(iterations)?;
            let Some(current) = frontier.pop(&f_cost) else {
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
                f_cost.insert(
                    name.to_string(),
                    candidate.saturating_add(tree.heuristic(child)),
                );
                if !frontier.replace(name, child, &f_cost) {
                    let pushed = frontier.push(name, child, &f_cost);
                    debug_assert!(pushed, "push after failed replace");
                }
            }
        }

        Err(SearchError::Exhausted { iterations })
    }
}
