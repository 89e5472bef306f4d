//! The terminal result of a successful run.

use sextant_kernel::{Cost, NodeId, SearchTree, StateNode};

/// Search effort beyond the expansion count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Node records allocated in the search tree, root included.
    pub nodes_generated: usize,
    /// Largest number of simultaneously queued nodes (0 for RBFS).
    pub frontier_high_water: usize,
}

/// A goal reached by a strategy, together with the explored tree that holds
/// its path.
///
/// Created once at the end of a run and immutable thereafter; the path and
/// its cost are derived from the parent links in the tree.
#[derive(Debug)]
pub struct Outcome {
    strategy: &'static str,
    tree: SearchTree,
    goal: NodeId,
    iterations: u64,
    stats: SearchStats,
}

impl Outcome {
    /// Package a goal found by `strategy`.
    ///
    /// `stats.nodes_generated` is taken from the tree.
    #[must_use]
    pub fn new(
        strategy: &'static str,
        tree: SearchTree,
        goal: NodeId,
        iterations: u64,
        frontier_high_water: usize,
    ) -> Self {
        let stats = SearchStats {
            nodes_generated: tree.len(),
            frontier_high_water,
        };
        Self {
            strategy,
            tree,
            goal,
            iterations,
            stats,
        }
    }

    /// Registry name of the strategy that produced this outcome.
    #[must_use]
    pub const fn strategy(&self) -> &'static str {
        self.strategy
    }

    #[must_use]
    pub const fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Handle of the goal node in [`Outcome::tree`].
    #[must_use]
    pub const fn goal(&self) -> NodeId {
        self.goal
    }

    #[must_use]
    pub fn goal_node(&self) -> &dyn StateNode {
        self.tree.state(self.goal)
    }

    /// Number of expansions, the goal pop included.
    #[must_use]
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Node names from the start node to the goal, inclusive.
    #[must_use]
    pub fn path(&self) -> Vec<&str> {
        self.tree
            .path_to(self.goal)
            .into_iter()
            .map(|id| self.tree.name(id))
            .collect()
    }

    /// Number of edges on the path.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.tree.depth(self.goal)
    }

    /// Sum of `cost()` along the parent chain, start node included.
    #[must_use]
    pub fn total_cost(&self) -> Cost {
        self.tree.path_cost(self.goal)
    }
}
