//! The state-space contract every strategy consumes.
//!
//! Environments are supplied by collaborators (see `sextant_harness`); the
//! engine sees them only through these two object-safe traits. Parent links
//! are not part of the contract: the engine records them in
//! [`crate::space::tree::SearchTree`] as it expands nodes.

use std::fmt;

/// Edge and path cost. Integer so that optimality comparisons are exact.
pub type Cost = i64;

/// A point in the state space.
///
/// # Contract
///
/// - `name` is unique and stable for the underlying state within one run.
///   Every bookkeeping map in the engine is keyed by it.
/// - `cost` is the incremental cost of the edge that produced this node
///   (0 for the start node).
/// - `heuristic` estimates the remaining cost to a goal. A*, RBFS and SMA*
///   are only optimal when it never overestimates; the engine does not check.
/// - `children` may be called more than once per state by some strategies,
///   and must return the same neighbours each time.
pub trait StateNode: fmt::Debug {
    /// Unique identifier of the underlying state.
    fn name(&self) -> &str;

    /// Cost of the edge from the parent to this node.
    fn cost(&self) -> Cost;

    /// Estimated remaining cost to a goal.
    fn heuristic(&self) -> Cost;

    /// Neighbouring states reachable in one step.
    fn children(&self) -> Vec<Box<dyn StateNode>>;

    /// Identity by underlying state, not by path.
    fn is_same(&self, other: &dyn StateNode) -> bool {
        self.name() == other.name()
    }
}

/// A searchable state space: a start node and a goal test.
pub trait Environment {
    /// Diagnostic name of the environment.
    fn name(&self) -> &str;

    /// The initial node. Its `cost()` must be 0.
    fn start(&self) -> Box<dyn StateNode>;

    /// Whether `node` satisfies the goal condition.
    fn is_goal(&self, node: &dyn StateNode) -> bool;
}
