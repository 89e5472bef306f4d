//! Explicit weighted state graphs.
//!
//! States are declared by name with a heuristic; edges are directed and
//! weighted. A state's children come out sorted by name, so runs are
//! reproducible regardless of declaration order.

use std::collections::BTreeMap;
use std::rc::Rc;

use sextant_kernel::{Cost, Environment, StateNode};

use crate::error::EnvironmentError;

#[derive(Debug, Default)]
struct State {
    heuristic: Cost,
    children: BTreeMap<String, Cost>,
}

#[derive(Debug)]
struct GraphNode {
    states: Rc<BTreeMap<String, State>>,
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
        self.states.get(&self.name).map_or(0, |s| s.heuristic)
    }

    fn children(&self) -> Vec<Box<dyn StateNode>> {
        let Some(state) = self.states.get(&self.name) else {
            return Vec::new();
        };
        state
            .children
            .iter()
            .map(|(name, &cost)| {
                Box::new(GraphNode {
                    states: Rc::clone(&self.states),
                    name: name.clone(),
                    cost,
                }) as Box<dyn StateNode>
            })
            .collect()
    }
}

/// Accumulates states and edges; validated by [`StateGraphBuilder::build`].
#[derive(Debug)]
pub struct StateGraphBuilder {
    name: String,
    states: BTreeMap<String, State>,
    edges: Vec<(String, String, Cost)>,
}

impl StateGraphBuilder {
    /// Declare `name` with heuristic `heuristic`. Declaring a state again
    /// updates its heuristic.
    #[must_use]
    pub fn state(mut self, name: &str, heuristic: Cost) -> Self {
        self.states.entry(name.to_string()).or_default().heuristic = heuristic;
        self
    }

    /// Add a directed edge. A repeated edge overwrites the earlier cost.
    #[must_use]
    pub fn edge(mut self, from: &str, to: &str, cost: Cost) -> Self {
        self.edges.push((from.to_string(), to.to_string(), cost));
        self
    }

    /// Add edges in both directions with the same cost.
    #[must_use]
    pub fn undirected(self, a: &str, b: &str, cost: Cost) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    /// Validate and freeze the graph.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::UnknownState`] if the start, the goal, or
    /// either end of an edge was never declared, and
    /// [`EnvironmentError::NegativeCost`] for a negative edge cost.
    pub fn build(mut self, start: &str, goal: &str) -> Result<StateGraph, EnvironmentError> {
        for (role, name) in [("start", start), ("goal", goal)] {
            if !self.states.contains_key(name) {
                return Err(EnvironmentError::UnknownState {
                    role,
                    name: name.to_string(),
                });
            }
        }
        for (from, to, cost) in self.edges {
            if cost < 0 {
                return Err(EnvironmentError::NegativeCost { from, to, cost });
            }
            if !self.states.contains_key(&to) {
                return Err(EnvironmentError::UnknownState {
                    role: "child",
                    name: to,
                });
            }
            let Some(state) = self.states.get_mut(&from) else {
                return Err(EnvironmentError::UnknownState {
                    role: "parent",
                    name: from,
                });
            };
            state.children.insert(to, cost);
        }
        Ok(StateGraph {
            name: self.name,
            states: Rc::new(self.states),
            start: start.to_string(),
            goal: goal.to_string(),
        })
    }
}

/// A validated explicit state graph with one start and one goal state.
#[derive(Debug)]
pub struct StateGraph {
    name: String,
    states: Rc<BTreeMap<String, State>>,
    start: String,
    goal: String,
}

impl StateGraph {
    #[must_use]
    pub fn builder(name: &str) -> StateGraphBuilder {
        StateGraphBuilder {
            name: name.to_string(),
            states: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    /// Number of declared states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Environment for StateGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> Box<dyn StateNode> {
        Box::new(GraphNode {
            states: Rc::clone(&self.states),
            name: self.start.clone(),
            cost: 0,
        })
    }

    fn is_goal(&self, node: &dyn StateNode) -> bool {
        node.name() == self.goal
    }
}
