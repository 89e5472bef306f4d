//! Small explicit graphs for strategy unit tests.

use std::collections::BTreeMap;
use std::rc::Rc;

use sextant_kernel::{Cost, Environment, StateNode};

#[derive(Debug, Default)]
struct GraphData {
    heuristic: BTreeMap<String, Cost>,
    edges: BTreeMap<String, Vec<(String, Cost)>>,
}

#[derive(Debug)]
struct GraphNode {
    data: Rc<GraphData>,
    name: String,
    cost: Cost,
}

impl StateNode for GraphNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> Cost {
        self.cost
    }

    fn heuristic(&self) -> Cost {
        self.data.heuristic.get(&self.name).copied().unwrap_or(0)
    }

    fn children(&self) -> Vec<Box<dyn StateNode>> {
        self.data
            .edges
            .get(&self.name)
            .map(|edges| {
                edges
                    .iter()
                    .map(|(to, cost)| {
                        Box::new(GraphNode {
                            data: Rc::clone(&self.data),
                            name: to.clone(),
                            cost: *cost,
                        }) as Box<dyn StateNode>
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Builder for a weighted directed graph; children keep insertion order.
#[derive(Debug, Default)]
pub(crate) struct Graph {
    data: GraphData,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn h(mut self, name: &str, heuristic: Cost) -> Self {
        self.data.heuristic.insert(name.to_string(), heuristic);
        self
    }

    pub(crate) fn edge(mut self, from: &str, to: &str, cost: Cost) -> Self {
        self.data
            .edges
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), cost));
        self
    }

    /// Edges in both directions with the same cost.
    pub(crate) fn both(self, a: &str, b: &str, cost: Cost) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    pub(crate) fn env(self, start: &str, goal: &str) -> GraphEnv {
        GraphEnv {
            data: Rc::new(self.data),
            start: start.to_string(),
            goal: goal.to_string(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct GraphEnv {
    data: Rc<GraphData>,
    start: String,
    goal: String,
}

impl Environment for GraphEnv {
    fn name(&self) -> &str {
        "fixture"
    }

    fn start(&self) -> Box<dyn StateNode> {
        Box::new(GraphNode {
            data: Rc::clone(&self.data),
            name: self.start.clone(),
            cost: 0,
        })
    }

    fn is_goal(&self, node: &dyn StateNode) -> bool {
        node.name() == self.goal
    }
}

/// `A -> B (1) -> C (1)` and `A -> C (5)`, goal `C`.
pub(crate) fn detour() -> GraphEnv {
    Graph::new()
        .edge("A", "C", 5)
        .edge("A", "B", 1)
        .edge("B", "C", 1)
        .env("A", "C")
}

/// Undirected weighted graph with an admissible heuristic towards `G`.
///
/// Cheapest route `S-A-C-G` costs 6; `S-B-G` has fewer edges and costs 9.
pub(crate) fn weighted() -> GraphEnv {
    Graph::new()
        .both("S", "A", 1)
        .both("S", "B", 4)
        .both("A", "C", 2)
        .both("B", "G", 5)
        .both("C", "G", 3)
        .both("A", "B", 2)
        .h("S", 5)
        .h("A", 4)
        .h("B", 4)
        .h("C", 3)
        .h("G", 0)
        .env("S", "G")
}

/// A chain `n0 -> n1 -> ... -> n{len}` with unit edges; goal at the end.
pub(crate) fn chain(len: usize) -> GraphEnv {
    let mut graph = Graph::new();
    for i in 0..len {
        graph = graph.edge(&format!("n{i}"), &format!("n{}", i + 1), 1);
    }
    graph.env("n0", &format!("n{len}"))
}

/// A two-node cycle with no reachable goal.
pub(crate) fn no_goal() -> GraphEnv {
    Graph::new().both("A", "B", 1).env("A", "Z")
}
