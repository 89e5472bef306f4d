//! Harness errors: environment construction and report packaging.

use sextant_kernel::Cost;
use sextant_search::{RegistryError, SearchError};
use thiserror::Error;

/// An environment description was rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    #[error("grid '{name}' has no rows")]
    EmptyGrid { name: String },

    #[error("expected all rows to have length {expected}, but row {row} has length {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({x},{y}) has invalid value '{cell}'")]
    InvalidCell { x: usize, y: usize, cell: char },

    #[error("multiple start cells: ({x},{y}) is the second")]
    DuplicateStart { x: usize, y: usize },

    #[error("multiple end cells: ({x},{y}) is the second")]
    DuplicateEnd { x: usize, y: usize },

    #[error("could not find start cell ('*')")]
    MissingStart,

    #[error("could not find end cell ('!')")]
    MissingEnd,

    #[error("{role} state '{name}' is not declared")]
    UnknownState { role: &'static str, name: String },

    #[error("edge {from} -> {to} has negative cost {cost}")]
    NegativeCost { from: String, to: String, cost: Cost },
}

/// A harness run failed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("strategy '{strategy}' failed on '{environment}': {source}")]
    Search {
        strategy: String,
        environment: String,
        #[source]
        source: SearchError,
    },

    #[error("could not serialize report: {detail}")]
    Canon { detail: String },
}

impl RunError {
    /// The underlying search failure, if this is one.
    #[must_use]
    pub fn search_error(&self) -> Option<&SearchError> {
        match self {
            Self::Search { source, .. } => Some(source),
            _ => None,
        }
    }
}
