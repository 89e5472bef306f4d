//! Shared helpers for sextant benchmark suites.

use std::collections::HashMap;

use sextant_harness::{GridSpace, StateGraph};
use sextant_kernel::{Cost, Environment, NodeId, SearchTree};
use sextant_search::RunContext;

/// A deterministic `width × height` maze.
///
/// The top row and right column are always open, so the end cell in the
/// bottom-right corner is reachable from the start in the top-left.
///
/// # Panics
///
/// Panics if `width` or `height` is below 2. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn maze(width: usize, height: usize) -> GridSpace {
    let rows: Vec<String> = (0..height)
        .map(|y| (0..width).map(|x| cell(x, y, width, height)).collect())
        .collect();
    GridSpace::from_rows(&format!("maze_{width}x{height}"), &rows).expect("generated maze is valid")
}

fn cell(x: usize, y: usize, width: usize, height: usize) -> char {
    if (x, y) == (0, 0) {
        return '*';
    }
    if (x, y) == (width - 1, height - 1) {
        return '!';
    }
    if y > 0 && x < width - 1 && (x * 7 + y * 13) % 11 == 0 {
        return 'x';
    }
    match (x * 3 + y * 5) % 4 {
        2 => ',',
        3 => '#',
        _ => '.',
    }
}

/// A root with `n` children named `c0..c{n}`, expanded into a tree, plus a
/// cost key per child that makes insertion order differ from priority
/// order.
///
/// # Panics
///
/// Panics if the generated graph is rejected. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn fan(n: usize) -> (SearchTree, Vec<NodeId>, HashMap<String, Cost>) {
    let mut builder = StateGraph::builder("fan").state("root", 0);
    let mut keys = HashMap::with_capacity(n);
    for i in 0..n {
        let name = format!("c{i}");
        let cost = Cost::try_from((i * 7919) % 1009).unwrap_or(0);
        builder = builder.state(&name, 0).edge("root", &name, cost);
        keys.insert(name, cost);
    }
    let env = builder.build("root", "root").expect("generated fan is valid");
    let mut tree = SearchTree::new(env.start());
    let children = tree.expand(tree.root());
    (tree, children, keys)
}

/// A context that satisfies every strategy's required parameters.
#[must_use]
pub fn context_for(strategy: &str) -> RunContext {
    match strategy {
        "depth_limited" => RunContext::new().with("depth_limit", "4096"),
        "sma*" => RunContext::new().with("max_frontier_size", "4096"),
        _ => RunContext::new(),
    }
}
