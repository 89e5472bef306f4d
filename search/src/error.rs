//! Typed search errors.
//!
//! Configuration problems are detected before the first expansion and are
//! reported as [`SearchError::Config`]. Every other variant is a terminal
//! outcome of a run that did not reach a goal; no partial result accompanies
//! it.

use thiserror::Error;

/// A strategy parameter in the [`crate::context::RunContext`] is missing or
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required key was not supplied.
    #[error("required parameter '{key}' was not supplied")]
    Missing { key: String },

    /// A value could not be parsed or is out of range.
    #[error("could not use '{value}' for parameter '{key}': {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Failure of a single strategy run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Rejected before search began.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The frontier (or recursion) ran dry without reaching a goal.
    #[error(
        "frontier is empty after {iterations} expansions; searched entire space, \
         but could not find goal state"
    )]
    Exhausted { iterations: u64 },

    /// SMA* ran out of frontier under its memory bound.
    #[error(
        "frontier is empty after {iterations} expansions; searched the space reachable \
         within a frontier of {max_frontier_size} nodes, but could not find goal state"
    )]
    BoundExhausted {
        max_frontier_size: usize,
        iterations: u64,
    },

    /// Iterative deepening reached its configured ceiling.
    #[error("reached max depth {max_depth} after {iterations} expansions before finding goal state")]
    MaxDepthExceeded { max_depth: usize, iterations: u64 },

    /// The `max_expansions` budget ran out between two expansions.
    #[error("expansion budget of {max_expansions} exhausted before finding goal state")]
    ExpansionBudgetExceeded { max_expansions: u64 },
}

impl SearchError {
    /// Expansions performed before the run failed, when known.
    #[must_use]
    pub fn iterations(&self) -> Option<u64> {
        match self {
            Self::Config(_) => Some(0),
            Self::Exhausted { iterations }
            | Self::BoundExhausted { iterations, .. }
            | Self::MaxDepthExceeded { iterations, .. } => Some(*iterations),
            Self::ExpansionBudgetExceeded { max_expansions } => Some(*max_expansions),
        }
    }
}

/// A strategy name was not found in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("could not find strategy '{name}' (known: {})", .known.join(", "))]
    UnknownStrategy { name: String, known: Vec<String> },
}
