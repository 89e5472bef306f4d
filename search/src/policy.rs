//! Typed strategy parameters parsed from a [`RunContext`].
//!
//! Parsing happens once, before the first expansion, so a malformed value is
//! always a [`ConfigError`] and never a mid-search failure.

use tracing::warn;

use crate::context::RunContext;
use crate::error::{ConfigError, SearchError};

/// Optional cap on expansions, honoured by every strategy.
pub const MAX_EXPANSIONS_KEY: &str = "max_expansions";
/// Required by depth-limited search.
pub const DEPTH_LIMIT_KEY: &str = "depth_limit";
/// First depth bound tried by iterative deepening.
pub const INITIAL_DEPTH_KEY: &str = "initial_depth";
/// Depth bound at which iterative deepening gives up.
pub const MAX_DEPTH_KEY: &str = "max_depth";
/// SMA* memory bound.
pub const MAX_FRONTIER_SIZE_KEY: &str = "max_frontier_size";

/// SMA* frontier bound used when none is configured.
pub const DEFAULT_MAX_FRONTIER_SIZE: usize = 512;

/// Expansion budget checked between expansions.
///
/// Without `max_expansions` the budget is unlimited and a search against an
/// unbounded space runs until it finds a goal or exhausts the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionBudget {
    max_expansions: Option<u64>,
}

impl ExpansionBudget {
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_expansions: None,
        }
    }

    #[must_use]
    pub const fn limited(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Read `max_expansions` from the context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the value is not a non-negative
    /// integer.
    pub fn from_context(ctx: &RunContext) -> Result<Self, ConfigError> {
        Ok(Self {
            max_expansions: ctx.parse(MAX_EXPANSIONS_KEY)?,
        })
    }

    #[must_use]
    pub const fn max_expansions(&self) -> Option<u64> {
        self.max_expansions
    }

    /// Check whether one more expansion may start after `spent` expansions.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ExpansionBudgetExceeded`] once `spent` reaches
    /// the budget.
    pub fn admit(&self, spent: u64) -> Result<(), SearchError> {
        match self.max_expansions {
            Some(max_expansions) if spent >= max_expansions => {
                Err(SearchError::ExpansionBudgetExceeded { max_expansions })
            }
            _ => Ok(()),
        }
    }
}

/// Parameters for depth-limited search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimitedParams {
    /// Nodes at this depth or deeper are never queued.
    pub depth_limit: usize,
    pub budget: ExpansionBudget,
}

impl DepthLimitedParams {
    /// # Errors
    ///
    /// `depth_limit` is required; returns [`ConfigError`] if it is missing or
    /// not a non-negative integer.
    pub fn from_context(ctx: &RunContext) -> Result<Self, ConfigError> {
        Ok(Self {
            depth_limit: ctx.require(DEPTH_LIMIT_KEY)?,
            budget: ExpansionBudget::from_context(ctx)?,
        })
    }
}

/// Parameters for iterative deepening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeDeepeningParams {
    /// First depth limit tried (default 0).
    pub initial_depth: usize,
    /// Give up once the depth limit reaches this value (default: never).
    pub max_depth: Option<usize>,
    /// Shared across every depth-limited attempt.
    pub budget: ExpansionBudget,
}

impl IterativeDeepeningParams {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `initial_depth` or `max_depth` is
    /// present but not a non-negative integer.
    pub fn from_context(ctx: &RunContext) -> Result<Self, ConfigError> {
        Ok(Self {
            initial_depth: ctx.parse(INITIAL_DEPTH_KEY)?.unwrap_or(0),
            max_depth: ctx.parse(MAX_DEPTH_KEY)?,
            budget: ExpansionBudget::from_context(ctx)?,
        })
    }
}

/// Parameters for memory-bounded A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmaStarParams {
    /// Most nodes the frontier may hold at once. Always at least 1.
    pub max_frontier_size: usize,
    pub budget: ExpansionBudget,
}

impl SmaStarParams {
    /// Falls back to [`DEFAULT_MAX_FRONTIER_SIZE`] with a warning when the
    /// bound is not configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `max_frontier_size` is not a
    /// positive integer.
    pub fn from_context(ctx: &RunContext) -> Result<Self, ConfigError> {
        let max_frontier_size = match ctx.parse::<usize>(MAX_FRONTIER_SIZE_KEY)? {
            Some(0) => {
                return Err(ConfigError::Invalid {
                    key: MAX_FRONTIER_SIZE_KEY.to_string(),
                    value: "0".to_string(),
                    reason: "the frontier must hold at least one node".to_string(),
                })
            }
            Some(size) => size,
            None => {
                warn!(
                    default = DEFAULT_MAX_FRONTIER_SIZE,
                    "parameter 'max_frontier_size' not supplied, using default"
                );
                DEFAULT_MAX_FRONTIER_SIZE
            }
        };
        Ok(Self {
            max_frontier_size,
            budget: ExpansionBudget::from_context(ctx)?,
        })
    }
}
