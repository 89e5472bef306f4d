//! Shared fixtures for the lock tests: environments with known answers and
//! a brute-force reference over the state-space contract.

use std::collections::HashSet;

use sextant_harness::{GridSpace, StateGraph};
use sextant_kernel::{Cost, Environment, StateNode};
use sextant_search::RunContext;

/// Every strategy in the standard registry, in registry order.
pub const ALL_STRATEGIES: [&str; 9] = [
    "a*",
    "breadth_first",
    "depth_first",
    "depth_limited",
    "greedy_best_first",
    "iterative_deepening",
    "rbfs",
    "sma*",
    "uniform_cost",
];

/// A context that satisfies every strategy's required parameters.
#[must_use]
pub fn context_for(strategy: &str) -> RunContext {
    let ctx = RunContext::new().with("max_expansions", "100000");
    match strategy {
        "depth_limited" => ctx.with("depth_limit", "64"),
        "sma*" => ctx.with("max_frontier_size", "512"),
        _ => ctx,
    }
}

// ---------------------------------------------------------------------------
// Environments
// ---------------------------------------------------------------------------

/// 2×2 grid of low-cost cells, start top-left, end bottom-right.
#[must_use]
pub fn two_by_two() -> GridSpace {
    GridSpace::from_rows("two_by_two", &["*.", ".!"]).expect("valid grid")
}

/// 3×3 room with a costly centre; both optimal routes hug the walls.
#[must_use]
pub fn room() -> GridSpace {
    GridSpace::from_rows("room", &["*..", ".#.", "..!"]).expect("valid grid")
}

/// A small maze with walls and mixed cell costs.
#[must_use]
pub fn maze() -> GridSpace {
    GridSpace::from_rows(
        "maze",
        &[
            "*..x....", //
            ".x.x.xx.",
            ".x...x..",
            ".xxx,x.x",
            "..#..x..",
            "x.x.xx,.",
            "..x....!",
        ],
    )
    .expect("valid grid")
}

/// `A → B → C` at cost 1 each, and `A → C` directly at cost 5.
#[must_use]
pub fn detour() -> StateGraph {
    StateGraph::builder("detour")
        .state("A", 0)
        .state("B", 0)
        .state("C", 0)
        .edge("A", "B", 1)
        .edge("B", "C", 1)
        .edge("A", "C", 5)
        .build("A", "C")
        .expect("valid graph")
}

/// Acyclic graph whose cheapest path (S,A,B,C,G at 4) is longer than its
/// fewest-step path (S,D,G at 7). The heuristic is consistent.
#[must_use]
pub fn ladder() -> StateGraph {
    StateGraph::builder("ladder")
        .state("S", 4)
        .state("A", 3)
        .state("B", 2)
        .state("C", 1)
        .state("D", 2)
        .state("G", 0)
        .edge("S", "A", 1)
        .edge("S", "D", 4)
        .edge("A", "B", 1)
        .edge("A", "D", 2)
        .edge("B", "C", 1)
        .edge("C", "G", 1)
        .edge("D", "G", 3)
        .build("S", "G")
        .expect("valid graph")
}

/// Three siblings that must all be open at once for plain A*: the
/// cheapest route runs through the last one.
#[must_use]
pub fn three_open() -> StateGraph {
    StateGraph::builder("three_open")
        .state("S", 1)
        .state("A", 1)
        .state("B", 1)
        .state("C", 1)
        .state("G", 0)
        .edge("S", "A", 1)
        .edge("S", "B", 1)
        .edge("S", "C", 1)
        .edge("A", "G", 5)
        .edge("B", "G", 4)
        .edge("C", "G", 1)
        .build("S", "G")
        .expect("valid graph")
}

/// Fully connected layered DAG: `S`, `layers` layers of `width` states,
/// then `G`. Edge costs vary deterministically between 1 and 4; the
/// heuristic is zero.
#[must_use]
pub fn layered(layers: usize, width: usize) -> StateGraph {
    let name = |layer: usize, slot: usize| format!("L{layer}_{slot}");
    let mut builder = StateGraph::builder(&format!("layered_{layers}x{width}"))
        .state("S", 0)
        .state("G", 0);
    for layer in 0..layers {
        for slot in 0..width {
            builder = builder.state(&name(layer, slot), 0);
        }
    }
    for slot in 0..width {
        builder = builder.edge("S", &name(0, slot), cost_of(slot + 1));
        builder = builder.edge(&name(layers - 1, slot), "G", cost_of(slot % 3 + 1));
    }
    for layer in 0..layers - 1 {
        for from in 0..width {
            for to in 0..width {
                let cost = cost_of((layer * 7 + from * 3 + to * 5) % 4 + 1);
                builder = builder.edge(&name(layer, from), &name(layer + 1, to), cost);
            }
        }
    }
    builder.build("S", "G").expect("valid graph")
}

#[allow(clippy::cast_possible_wrap)]
fn cost_of(n: usize) -> Cost {
    n as Cost
}

// ---------------------------------------------------------------------------
// Brute-force reference
// ---------------------------------------------------------------------------

/// Optimal figures over every simple path from start to goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub min_cost: Cost,
    pub min_steps: usize,
}

/// Enumerate every simple path through `env` by walking `children()`.
///
/// Returns `None` when the goal is unreachable. Exponential; only for small
/// fixtures.
#[must_use]
pub fn brute_force(env: &dyn Environment) -> Option<Reference> {
    let start = env.start();
    let mut on_path = HashSet::from([start.name().to_string()]);
    let mut best = None;
    walk(env, start.as_ref(), 0, 0, &mut on_path, &mut best);
    best
}

fn walk(
    env: &dyn Environment,
    node: &dyn StateNode,
    cost: Cost,
    steps: usize,
    on_path: &mut HashSet<String>,
    best: &mut Option<Reference>,
) {
    if env.is_goal(node) {
        let found = best.get_or_insert(Reference {
            min_cost: cost,
            min_steps: steps,
        });
        found.min_cost = found.min_cost.min(cost);
        found.min_steps = found.min_steps.min(steps);
        return;
    }
    for child in node.children() {
        if !on_path.insert(child.name().to_string()) {
            continue;
        }
        walk(env, child.as_ref(), cost + child.cost(), steps + 1, on_path, best);
        on_path.remove(child.name());
    }
}
