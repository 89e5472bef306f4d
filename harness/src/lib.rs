//! Sextant Harness: concrete environments and run orchestration.
//!
//! The harness supplies the state spaces strategies run against (a
//! character grid and an explicit state graph) and a runner that resolves a
//! strategy by name, runs it, and packages a [`runner::SearchReport`] with a
//! canonical JSON form and content digest.
//!
//! The harness does NOT implement search logic; it delegates to
//! `sextant_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod environments;
pub mod error;
pub mod runner;

pub use environments::grid::GridSpace;
pub use environments::state_graph::{StateGraph, StateGraphBuilder};
pub use error::{EnvironmentError, RunError};
pub use runner::{run_search, SearchReport};
