//! Sextant Search: the strategy engine.
//!
//! Nine search strategies over the state-space contract defined in
//! `sextant_kernel`, sharing one indexed priority frontier. Within the
//! workspace it depends only on `sextant_kernel`; concrete environments
//! and reporting live in `sextant_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! sextant_kernel  ←  sextant_search  ←  sextant_harness
//! (contract, tree)   (frontier, strategies)   (environments, runner)
//! ```
//!
//! # Key types
//!
//! - [`Strategy`] -- a search algorithm, run with a [`RunContext`] against an
//!   `Environment`
//! - [`StrategyRegistry`] -- name-to-strategy lookup
//! - [`PriorityFrontier`] -- indexed heap with decrease/increase-key
//! - [`Outcome`] -- goal node, explored tree, expansion count
//! - [`SearchError`] -- configuration errors and exhaustion outcomes

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod error;
pub mod frontier;
pub mod outcome;
pub mod policy;
pub mod registry;
pub mod strategy;

pub use context::RunContext;
pub use error::{ConfigError, RegistryError, SearchError};
pub use frontier::{Order, Priority, PriorityFrontier, PriorityKeys};
pub use outcome::{Outcome, SearchStats};
pub use policy::{
    DepthLimitedParams, ExpansionBudget, IterativeDeepeningParams, SmaStarParams,
    DEFAULT_MAX_FRONTIER_SIZE,
};
pub use registry::StrategyRegistry;
pub use strategy::Strategy;
