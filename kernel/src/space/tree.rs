//! Append-only arena of explored nodes.
//!
//! Every node instance represents one specific path to its state, so the
//! same state may appear several times with different parents. Parent links
//! are `NodeId` handles into this arena. A strategy that forgets a node
//! (SMA* eviction) only drops its own bookkeeping, and children that still
//! point at the forgotten parent keep a valid handle. The only way records
//! leave the arena is [`SearchTree::truncate`], which drops the newest ones.

use std::fmt;

use crate::space::contract::{Cost, StateNode};

/// Handle to a node record in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the record in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One explored node: the state plus the path that reached it.
#[derive(Debug)]
pub struct NodeRecord {
    /// The environment-supplied state.
    pub state: Box<dyn StateNode>,
    /// The node this one was expanded from (`None` for the start node).
    pub parent: Option<NodeId>,
    /// Number of edges from the start node.
    pub depth: usize,
    /// Sum of `cost()` along the parent chain, including this node.
    pub path_cost: Cost,
}

/// Run-scoped arena of node records, rooted at the start node.
#[derive(Debug)]
pub struct SearchTree {
    records: Vec<NodeRecord>,
}

impl SearchTree {
    /// Create a tree whose root is `start`.
    #[must_use]
    pub fn new(start: Box<dyn StateNode>) -> Self {
        let path_cost = start.cost();
        Self {
            records: vec![NodeRecord {
                state: start,
                parent: None,
                depth: 0,
                path_cost,
            }],
        }
    }

    /// The start node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of node records allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every handle issued so far, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.records.len()).map(NodeId)
    }

    /// Drop every record allocated at or after position `len`, keeping the
    /// root. Handles issued for the dropped records become invalid; a later
    /// [`expand`](Self::expand) reuses their positions.
    pub fn truncate(&mut self, len: usize) {
        self.records.truncate(len.max(1));
    }

    /// The record behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn record(&self, id: NodeId) -> &NodeRecord {
        &self.records[id.index()]
    }

    #[must_use]
    pub fn state(&self, id: NodeId) -> &dyn StateNode {
        self.record(id).state.as_ref()
    }

    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        self.record(id).state.name()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.record(id).parent
    }

    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.record(id).depth
    }

    #[must_use]
    pub fn path_cost(&self, id: NodeId) -> Cost {
        self.record(id).path_cost
    }

    #[must_use]
    pub fn edge_cost(&self, id: NodeId) -> Cost {
        self.record(id).state.cost()
    }

    #[must_use]
    pub fn heuristic(&self, id: NodeId) -> Cost {
        self.record(id).state.heuristic()
    }

    /// Call `children()` on the state behind `id` and allocate one record
    /// per child, each with `id` as its parent.
    ///
    /// Every call issues a fresh `children()` call and allocates new
    /// records; strategies that must not re-expand cache the result.
    pub fn expand(&mut self, id: NodeId) -> Vec<NodeId> {
        let (children, depth, path_cost) = {
            let record = self.record(id);
            (record.state.children(), record.depth, record.path_cost)
        };
        let mut ids = Vec::with_capacity(children.len());
        for child in children {
            let child_cost = child.cost();
            let next = NodeId(self.records.len());
            self.records.push(NodeRecord {
                state: child,
                parent: Some(id),
                depth: depth + 1,
                path_cost: path_cost.saturating_add(child_cost),
            });
            ids.push(next);
        }
        ids
    }

    /// Whether `child` is the same state as the parent of `id`.
    #[must_use]
    pub fn is_parent_state(&self, id: NodeId, child: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|parent| self.state(parent).is_same(self.state(child)))
    }

    /// Node handles from the root to `id`, inclusive.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.depth(id) + 1);
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(node);
            current = self.parent(node);
        }
        path.reverse();
        path
    }
}
