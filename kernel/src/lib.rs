//! Sextant Kernel: the state-space contract shared by every search strategy.
//!
//! # API Surface
//!
//! - [`space::contract::StateNode`] / [`space::contract::Environment`] -- the
//!   object-safe interface environments implement
//! - [`space::bound::Bound`] -- finite-or-unbounded priority values
//! - [`space::tree::SearchTree`] -- the arena of explored paths with
//!   handle-based parent links
//!
//! The kernel has no knowledge of any particular strategy.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod space;

pub use space::bound::Bound;
pub use space::contract::{Cost, Environment, StateNode};
pub use space::tree::{NodeId, NodeRecord, SearchTree};
