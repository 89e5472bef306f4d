//! Concrete state spaces.
//!
//! Both environments share their immutable description between node
//! instances through `Rc`, so `children()` is cheap and nodes never borrow
//! from the environment.

pub mod grid;
pub mod state_graph;
