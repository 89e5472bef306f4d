//! Recursive best-first search (RBFS).
//!
//! Best-first search without a frontier: recursion with an f-limit
//! threaded through the calls. Each call expands one node, orders
//! its children by their backed-up f-values, and descends into the best
//! one with the limit tightened to the best alternative. When a subtree's
//! best f exceeds the limit, the call returns that f so the caller can
//! remember it and switch branches.
//!
//! The only cycle guard is the direct-parent exclusion: a child that is the
//! same state as the node's own parent is dropped before f-values are
//! computed. Longer cycles are not detected; `max_expansions` bounds such
//! runs.
//!
//! A call that fails rolls the tree back to where it stood before the call
//! expanded its node, so the arena only ever holds the current path and the
//! children of the nodes on it.

use sextant_kernel::{Bound, Environment, NodeId, SearchTree};
use tracing::{debug, trace};

use crate::context::RunContext;
use crate::error::SearchError;
use crate::outcome::Outcome;
use crate::policy::ExpansionBudget;
use crate::strategy::Strategy;

/// Cost-optimal given an admissible heuristic. Memory is linear in the
/// depth of the current path: abandoned subtrees are dropped from the tree
/// and regenerated if the search returns to them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveBestFirst;

impl Strategy for RecursiveBestFirst {
    fn name(&self) -> &'static str {
        "rbfs"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let budget = ExpansionBudget::from_context(ctx)?;
        debug!(strategy = self.name(), environment = env.name(), "search started");

        let mut search = Recursion {
            env,
            tree: SearchTree::new(env.start()),
            budget,
            iterations: 0,
        };
        let root = search.tree.root();
        let root_f = f_value(&search.tree, root);
        match search.recurse(root, root_f, Bound::Unbounded)? {
            Step::Found(goal) => {
                debug!(
                    strategy = self.name(),
                    iterations = search.iterations,
                    cost = search.tree.path_cost(goal),
                    "goal reached"
                );
                Ok(Outcome::new(
                    self.name(),
                    search.tree,
                    goal,
                    search.iterations,
                    0,
                ))
            }
            Step::Failed(_) => Err(SearchError::Exhausted {
                iterations: search.iterations,
            }),
        }
    }
}

/// What one recursive call reports to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Found(NodeId),
    /// The subtree's best backed-up f-value; `Unbounded` when exhausted.
    Failed(Bound),
}

struct Recursion<'a> {
    env: &'a dyn Environment,
    tree: SearchTree,
    budget: ExpansionBudget,
    iterations: u64,
}

fn f_value(tree: &SearchTree, id: NodeId) -> Bound {
    Bound::Finite(tree.path_cost(id).saturating_add(tree.heuristic(id)))
}

impl Recursion<'_> {
    fn recurse(&mut self, node: NodeId, node_f: Bound, f_limit: Bound) -> Result<Step, SearchError> {
        if self.env.is_goal(self.tree.state(node)) {
            return Ok(Step::Found(node));
        }
        self.budget.admit(self.iterations)?;
        self.iterations += 1;

        let mark = self.tree.len();
        let step = self.descend(node, node_f, f_limit)?;
        if matches!(step, Step::Failed(_)) {
            self.tree.truncate(mark);
        }
        Ok(step)
    }

    fn descend(&mut self, node: NodeId, node_f: Bound, f_limit: Bound) -> Result<Step, SearchError> {
        let children: Vec<NodeId> = self
            .tree
            .expand(node)
            .into_iter()
            .filter(|&child| !self.tree.is_parent_state(node, child))
            .collect();
        if children.is_empty() {
            return Ok(Step::Failed(Bound::Unbounded));
        }

        // f never drops below the parent's own f along a path.
        let mut f: Vec<Bound> = children
            .iter()
            .map(|&child| f_value(&self.tree, child).max(node_f))
            .collect();

        loop {
            let mut best = 0;
            for (idx, value) in f.iter().enumerate().skip(1) {
                if value.is_lower_than(f[best]) {
                    best = idx;
                }
            }
            let best_f = f[best];
            if best_f.is_unbounded() || best_f.exceeds(f_limit) {
                return Ok(Step::Failed(best_f));
            }

            let alternative = f
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != best)
                .fold(Bound::Unbounded, |acc, (_, &value)| acc.min(value));

            trace!(
                node = self.tree.name(node),
                child = self.tree.name(children[best]),
                f = %best_f,
                limit = %f_limit.min(alternative),
                "descending"
            );
            match self.recurse(children[best], best_f, f_limit.min(alternative))? {
                Step::Found(goal) => return Ok(Step::Found(goal)),
                Step::Failed(backed_up) => f[best] = backed_up,
            }
        }
    }
}
