//! State space: the contract, the unbounded-aware priority value, and the
//! arena that records explored paths.
//!
//! `contract` ← `bound` ← `tree`. `contract` depends on nothing internal.

pub mod bound;
pub mod contract;
pub mod tree;
