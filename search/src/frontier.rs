//! Indexed priority frontier shared by every queue-based strategy.
//!
//! The frontier stores `(name, NodeId)` entries in a binary heap and keeps a
//! `name -> heap position` index, so membership, lookup, priority changes and
//! arbitrary removal are cheap. Priorities are NOT stored in the heap: every
//! operation reads them from a caller-owned [`PriorityKeys`] map, which lets
//! a strategy change a priority in its own bookkeeping and then call
//! [`PriorityFrontier::fix`].

use std::collections::HashMap;
use std::fmt;

use sextant_kernel::{Bound, Cost, NodeId};

/// Which end of the priority range is extracted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Minimum first (breadth-first, uniform-cost, greedy, A*, SMA*).
    LowestFirst,
    /// Maximum first (depth-first, depth-limited).
    HighestFirst,
}

/// A priority value the frontier can order.
pub trait Priority: Copy + fmt::Debug {
    /// Whether `self` must be extracted strictly before `other`.
    fn ranks_ahead(self, other: Self, order: Order) -> bool;
}

impl Priority for Bound {
    /// `Unbounded` ranks last when extracting the minimum and first when
    /// extracting the maximum.
    fn ranks_ahead(self, other: Self, order: Order) -> bool {
        match order {
            Order::LowestFirst => self.is_lower_than(other),
            Order::HighestFirst => self.is_higher_than(other),
        }
    }
}

/// Caller-owned source of priorities, keyed by node name.
pub trait PriorityKeys {
    type Priority: Priority;

    fn priority(&self, name: &str) -> Self::Priority;
}

/// Missing names rank as `Unbounded`.
impl PriorityKeys for HashMap<String, Bound> {
    type Priority = Bound;

    fn priority(&self, name: &str) -> Bound {
        self.get(name).copied().unwrap_or(Bound::Unbounded)
    }
}

/// Missing names rank as `Unbounded`.
impl PriorityKeys for HashMap<String, Cost> {
    type Priority = Bound;

    fn priority(&self, name: &str) -> Bound {
        self.get(name).map_or(Bound::Unbounded, |&v| Bound::Finite(v))
    }
}

/// Depth maps; missing names rank as `Unbounded`.
impl PriorityKeys for HashMap<String, usize> {
    type Priority = Bound;

    fn priority(&self, name: &str) -> Bound {
        self.get(name).map_or(Bound::Unbounded, |&depth| {
            Bound::Finite(Cost::try_from(depth).unwrap_or(Cost::MAX))
        })
    }
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    node: NodeId,
}

/// Binary heap of node handles with a name index.
#[derive(Debug, Clone)]
pub struct PriorityFrontier {
    heap: Vec<Entry>,
    index: HashMap<String, usize>,
    order: Order,
    high_water: usize,
}

impl PriorityFrontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new(order: Order) -> Self {
        Self::with_capacity(order, 0)
    }

    #[must_use]
    pub fn with_capacity(order: Order, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            order,
            high_water: 0,
        }
    }

    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Insert `node` under `name`.
    ///
    /// Returns `false` (and leaves the frontier unchanged) if an entry with
    /// the same name is already queued; callers replace or remove first.
    #[must_use = "a rejected push leaves the node out of the frontier"]
    pub fn push<K: PriorityKeys>(&mut self, name: &str, node: NodeId, keys: &K) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        let pos = self.heap.len();
        self.heap.push(Entry {
            name: name.to_string(),
            node,
        });
        self.index.insert(name.to_string(), pos);
        self.sift_up(pos, keys);
        self.high_water = self.high_water.max(self.heap.len());
        true
    }

    /// Remove and return the entry that ranks first.
    pub fn pop<K: PriorityKeys>(&mut self, keys: &K) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        Some(self.remove_at(0, keys).node)
    }

    /// The entry that ranks first, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<NodeId> {
        self.heap.first().map(|e| e.node)
    }

    /// Restore heap order after the priority of `name` changed.
    ///
    /// Returns `false` if `name` is not queued.
    pub fn fix<K: PriorityKeys>(&mut self, name: &str, keys: &K) -> bool {
        let Some(&pos) = self.index.get(name) else {
            return false;
        };
        self.fix_at(pos, keys);
        true
    }

    /// Overwrite the node queued under `name` (a better path to the same
    /// state) and restore heap order.
    ///
    /// Returns `false` if `name` is not queued.
    pub fn replace<K: PriorityKeys>(&mut self, name: &str, node: NodeId, keys: &K) -> bool {
        let Some(&pos) = self.index.get(name) else {
            return false;
        };
        self.heap[pos].node = node;
        self.fix_at(pos, keys);
        true
    }

    /// Remove the entry queued under `name`, wherever it sits in the heap.
    pub fn remove<K: PriorityKeys>(&mut self, name: &str, keys: &K) -> Option<NodeId> {
        let pos = *self.index.get(name)?;
        Some(self.remove_at(pos, keys).node)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The node queued under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).map(|&pos| self.heap[pos].node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Queued entries in heap order (not extraction order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.heap.iter().map(|e| (e.name.as_str(), e.node))
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    fn ahead<K: PriorityKeys>(&self, a: usize, b: usize, keys: &K) -> bool {
        keys.priority(&self.heap[a].name)
            .ranks_ahead(keys.priority(&self.heap[b].name), self.order)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        for pos in [a, b] {
            if let Some(slot) = self.index.get_mut(&self.heap[pos].name) {
                *slot = pos;
            }
        }
    }

    fn remove_at<K: PriorityKeys>(&mut self, pos: usize, keys: &K) -> Entry {
        let entry = self.heap.swap_remove(pos);
        self.index.remove(&entry.name);
        if pos < self.heap.len() {
            if let Some(slot) = self.index.get_mut(&self.heap[pos].name) {
                *slot = pos;
            }
            self.fix_at(pos, keys);
        }
        entry
    }

    fn fix_at<K: PriorityKeys>(&mut self, pos: usize, keys: &K) {
        if !self.sift_up(pos, keys) {
            self.sift_down(pos, keys);
        }
    }

    /// Returns whether the entry moved.
    fn sift_up<K: PriorityKeys>(&mut self, mut pos: usize, keys: &K) -> bool {
        let start = pos;
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.ahead(pos, parent, keys) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos != start
    }

    fn sift_down<K: PriorityKeys>(&mut self, mut pos: usize, keys: &K) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;
            if left < len && self.ahead(left, best, keys) {
                best = left;
            }
            if right < len && self.ahead(right, best, keys) {
                best = right;
            }
            if best == pos {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}
