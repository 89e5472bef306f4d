//! The nine search strategies behind one object-safe trait.
//!
//! Uninformed: [`BreadthFirst`], [`DepthFirst`], [`DepthLimited`],
//! [`IterativeDeepening`], [`UniformCost`]. Informed: [`GreedyBestFirst`],
//! [`AStar`], [`RecursiveBestFirst`], [`SmaStar`].
//!
//! Every strategy parses its parameters from the [`RunContext`] before the
//! first expansion, checks the [`crate::policy::ExpansionBudget`] between
//! expansions, and owns all of its bookkeeping for the duration of one
//! [`Strategy::run`] call.

pub mod a_star;
pub mod breadth_first;
pub mod depth_first;
pub mod depth_limited;
mod depth_ordered;
pub mod greedy_best_first;
pub mod iterative_deepening;
pub mod rbfs;
pub mod sma_star;
pub mod uniform_cost;

#[cfg(test)]
pub(crate) mod fixtures;

use sextant_kernel::Environment;

use crate::context::RunContext;
use crate::error::SearchError;
use crate::outcome::Outcome;

pub use a_star::AStar;
pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use depth_limited::DepthLimited;
pub use greedy_best_first::GreedyBestFirst;
pub use iterative_deepening::IterativeDeepening;
pub use rbfs::RecursiveBestFirst;
pub use sma_star::SmaStar;
pub use uniform_cost::UniformCost;

/// A search algorithm runnable against any [`Environment`].
pub trait Strategy {
    /// Registry name, e.g. `"a*"`.
    fn name(&self) -> &'static str;

    /// Search `env` from its start node until a goal is reached.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for bad parameters (before any
    /// expansion), [`SearchError::ExpansionBudgetExceeded`] when
    /// `max_expansions` runs out, and a strategy-specific exhaustion error
    /// when no goal is reachable.
    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError>;
}
