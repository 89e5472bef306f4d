//! Frontier-by-depth search shared by breadth-first, depth-first and
//! depth-limited search (and, through depth-limited, iterative deepening).

use std::collections::HashMap;

use sextant_kernel::{Environment, NodeId, SearchTree};
use tracing::trace;

use crate::error::SearchError;
use crate::frontier::{Order, PriorityFrontier};
use crate::outcome::Outcome;
use crate::policy::ExpansionBudget;

/// Result of one depth-ordered pass, successful or not.
#[derive(Debug)]
pub(crate) struct DepthOrderedRun {
    pub tree: SearchTree,
    pub goal: Option<NodeId>,
    pub iterations: u64,
    /// The depth limit kept some state out of the frontier that no
    /// shallower path had reached.
    pub cutoff_hit: bool,
    pub frontier_high_water: usize,
}

impl DepthOrderedRun {
    /// The goal as an [`Outcome`], or plain exhaustion.
    pub(crate) fn into_outcome(self, strategy: &'static str) -> Result<Outcome, SearchError> {
        match self.goal {
            Some(goal) => Ok(Outcome::new(
                strategy,
                self.tree,
                goal,
                self.iterations,
                self.frontier_high_water,
            )),
            None => Err(SearchError::Exhausted {
                iterations: self.iterations,
            }),
        }
    }
}

/// Search `env` with a frontier ordered by depth.
///
/// With a `depth_limit`, no node at depth `>= depth_limit` is ever queued;
/// the start node sits at depth 0, so a limit of 0 queues nothing. `spent`
/// expansions from earlier passes count against `budget`.
pub(crate) fn search(
    env: &dyn Environment,
    order: Order,
    depth_limit: Option<usize>,
    budget: ExpansionBudget,
    spent: u64,
) -> Result<DepthOrderedRun, SearchError> {
    let within = |depth: usize| depth_limit.map_or(true, |limit| depth < limit);

    let mut tree = SearchTree::new(env.start());
    let mut depth: HashMap<String, usize> = HashMap::new();
    let mut frontier = PriorityFrontier::new(order);
    let mut iterations = 0;
    let mut cutoff_hit = false;

    let root = tree.root();
    if within(0) {
        depth.insert(tree.name(root).to_string(), 0);
        let pushed = frontier.push(tree.name(root), root, &depth);
        debug_assert!(pushed, "empty frontier rejected the root");
    } else {
        cutoff_hit = true;
    }

    while !frontier.is_empty() {
        budget.admit(spent + iterations)?;
        let Some(current) = frontier.pop(&depth) else {
            break;
        };
        iterations += 1;

        if env.is_goal(tree.state(current)) {
            return Ok(DepthOrderedRun {
                tree,
                goal: Some(current),
                iterations,
                cutoff_hit,
                frontier_high_water: frontier.high_water(),
            });
        }

        let child_depth = tree.depth(current) + 1;
        let children = tree.expand(current);
        if !within(child_depth) {
            let unseen = children.iter().any(|&child| {
                !depth
                    .get(tree.name(child))
                    .is_some_and(|&seen| seen <= child_depth)
            });
            if unseen {
                cutoff_hit = true;
                trace!(node = tree.name(current), child_depth, "depth limit cut off children");
            }
            continue;
        }

        for child in children {
            let name = tree.name(child);
            if depth.get(name).is_some_and(|&seen| seen <= child_depth) {
                continue;
            }
            depth.insert(name.to_string(), child_depth);
            // A shallower path to a queued state replaces it; one to an
            // already expanded state re-opens it.
            if !frontier.replace(name, child, &depth) {
                let pushed = frontier.push(name, child, &depth);
                debug_assert!(pushed, "push after failed replace");
            }
        }
    }

    Ok(DepthOrderedRun {
        tree,
        goal: None,
        iterations,
        cutoff_hit,
        frontier_high_water: frontier.high_water(),
    })
}
