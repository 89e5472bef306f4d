//! Simplified memory-bounded A* (SMA*).
//!
//! A* with a hard cap on the number of queued nodes. Each expansion
//! generates one successor at a time; when the frontier is full, the worst
//! queued leaf is forgotten and its parent re-queued so the forgotten branch
//! can be regenerated later. Fully explored nodes back their best child's
//! f-value up into their ancestors, so a parent's priority keeps reflecting
//! the subtrees it no longer holds.
//!
//! Bookkeeping is keyed by state name:
//!
//! - `live` maps a name to the one node instance currently held in memory.
//!   A node is *generated* under a parent when its live instance has that
//!   parent in the arena.
//! - `f` holds the backed-up f-value. It outlives frontier membership and is
//!   dropped only when the node is forgotten.
//! - `successors` caches each expanded node's children, so `children()` is
//!   called at most once per node instance. The cache also remembers how
//!   far generation has got and the f-values of forgotten children.
//!
//! A node is *complete* once every child has had its first turn. Complete
//! nodes take the minimum f over their generated and forgotten children.
//! Forgotten children are regenerated best-first, after every fresh child.
//! A fresh child is pending while its state is not in memory, or while its
//! live instance was reached by a costlier path. A cheaper instance replaces
//! an unexpanded frontier leaf in place. If the costlier instance was already
//! expanded, it is reopened: everything generated under it is forgotten and
//! the cheaper instance is queued in its place.

use std::collections::HashMap;

use sextant_kernel::{Bound, Cost, Environment, NodeId, SearchTree};
use tracing::{debug, trace};

use crate::context::RunContext;
use crate::error::SearchError;
use crate::frontier::{Order, Priority, PriorityFrontier, PriorityKeys};
use crate::outcome::Outcome;
use crate::policy::SmaStarParams;
use crate::strategy::Strategy;

/// Optimal when the frontier bound covers the optimal path; otherwise it
/// may fail with [`SearchError::BoundExhausted`] but never returns a
/// costlier goal as its answer.
///
/// Reads `max_frontier_size` (default 512).
#[derive(Debug, Clone, Copy, Default)]
pub struct SmaStar;

impl Strategy for SmaStar {
    fn name(&self) -> &'static str {
        "sma*"
    }

    fn run(&self, ctx: &RunContext, env: &dyn Environment) -> Result<Outcome, SearchError> {
        let params = SmaStarParams::from_context(ctx)?;
        debug!(
            strategy = self.name(),
            environment = env.name(),
            max_frontier_size = params.max_frontier_size,
            "search started"
        );

        let mut run = BoundedSearch::new(env, params);
        let goal = run.search()?;
        debug!(
            strategy = self.name(),
            iterations = run.iterations,
            cost = run.memory.tree.path_cost(goal),
            "goal reached"
        );
        let high_water = run.frontier.high_water();
        Ok(Outcome::new(
            self.name(),
            run.memory.tree,
            goal,
            run.iterations,
            high_water,
        ))
    }
}

// ---------------------------------------------------------------------------
// Priority: lowest f first, deepest first among equal f
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FDepth {
    f: Bound,
    depth: usize,
}

impl Priority for FDepth {
    /// Extraction takes the deepest of the lowest-f nodes; the eviction
    /// scan takes the shallowest of the highest-f nodes.
    fn ranks_ahead(self, other: Self, order: Order) -> bool {
        match order {
            Order::LowestFirst => {
                self.f.is_lower_than(other.f) || (self.f == other.f && self.depth > other.depth)
            }
            Order::HighestFirst => {
                self.f.is_higher_than(other.f) || (self.f == other.f && self.depth < other.depth)
            }
        }
    }
}

/// Cached children of one expanded node.
#[derive(Debug)]
struct Expansion {
    children: Vec<NodeId>,
    /// Children before this index have had their first turn.
    cursor: usize,
    /// Backed-up f-values of forgotten children, by name.
    forgotten: HashMap<String, Bound>,
}

/// Everything SMA* remembers about the explored tree.
struct Memory {
    tree: SearchTree,
    live: HashMap<String, NodeId>,
    f: HashMap<String, Bound>,
    successors: HashMap<String, Expansion>,
}

impl PriorityKeys for Memory {
    type Priority = FDepth;

    fn priority(&self, name: &str) -> FDepth {
        FDepth {
            f: self.f_of(name),
            depth: self.live.get(name).map_or(0, |&id| self.tree.depth(id)),
        }
    }
}

impl Memory {
    fn f_of(&self, name: &str) -> Bound {
        self.f.get(name).copied().unwrap_or(Bound::Unbounded)
    }

    fn is_live(&self, id: NodeId) -> bool {
        self.live.get(self.tree.name(id)) == Some(&id)
    }

    fn expansion(&self, id: NodeId) -> Option<&Expansion> {
        self.successors.get(self.tree.name(id))
    }

    /// Cached children of `id` whose live instance was generated from `id`.
    fn generated(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.expansion(id)
            .into_iter()
            .flat_map(|expansion| expansion.children.iter().copied())
            .filter(|&child| self.is_live(child))
    }

    fn is_leaf(&self, id: NodeId) -> bool {
        self.generated(id).next().is_none()
    }

    /// Best f among generated and forgotten children; `Unbounded` if none.
    fn best_child_f(&self, id: NodeId) -> Bound {
        let forgotten = self
            .expansion(id)
            .into_iter()
            .flat_map(|expansion| expansion.forgotten.values().copied());
        self.generated(id)
            .map(|child| self.f_of(self.tree.name(child)))
            .chain(forgotten)
            .fold(Bound::Unbounded, Bound::min)
    }
}

struct BoundedSearch<'a> {
    env: &'a dyn Environment,
    params: SmaStarParams,
    memory: Memory,
    frontier: PriorityFrontier,
    iterations: u64,
    /// Lowest f-estimate of any successor cut off by the depth bound. A goal
    /// costlier than this is not reported.
    lost_floor: Bound,
}

impl<'a> BoundedSearch<'a> {
    fn new(env: &'a dyn Environment, params: SmaStarParams) -> Self {
        let tree = SearchTree::new(env.start());
        let root = tree.root();
        let name = tree.name(root).to_string();
        let root_f = Bound::Finite(tree.path_cost(root).saturating_add(tree.heuristic(root)));
        let memory = Memory {
            tree,
            live: HashMap::from([(name.clone(), root)]),
            f: HashMap::from([(name.clone(), root_f)]),
            successors: HashMap::new(),
        };
        let mut frontier =
            PriorityFrontier::with_capacity(Order::LowestFirst, params.max_frontier_size);
        let pushed = frontier.push(&name, root, &memory);
        debug_assert!(pushed, "empty frontier rejected the root");
        Self {
            env,
            params,
            memory,
            frontier,
            iterations: 0,
            lost_floor: Bound::Unbounded,
        }
    }

    fn bound_exhausted(&self) -> SearchError {
        SearchError::BoundExhausted {
            max_frontier_size: self.params.max_frontier_size,
            iterations: self.iterations,
        }
    }

    fn search(&mut self) -> Result<NodeId, SearchError> {
        while !self.frontier.is_empty() {
            self.params.budget.admit(self.iterations)?;
            let Some(current) = self.frontier.pop(&self.memory) else {
                break;
            };
            self.iterations += 1;

            if self.env.is_goal(self.memory.tree.state(current)) {
                let cost = Bound::Finite(self.memory.tree.path_cost(current));
                if self.lost_floor.is_lower_than(cost) {
                    trace!(floor = %self.lost_floor, cost = %cost, "goal refused");
                    return Err(self.bound_exhausted());
                }
                return Ok(current);
            }
            let current_f = self.memory.f_of(self.memory.tree.name(current));
            if current_f.is_unbounded() {
                // Every queued node is a dead end or too deep for the bound.
                return Err(self.bound_exhausted());
            }
            self.expand(current, current_f)?;
        }
        Err(self.bound_exhausted())
    }

    /// One SMA* step on a popped, non-goal node.
    fn expand(&mut self, current: NodeId, current_f: Bound) -> Result<(), SearchError> {
        let current_name = self.memory.tree.name(current).to_string();
        if !self.memory.successors.contains_key(&current_name) {
            let children = self.memory.tree.expand(current);
            self.memory.successors.insert(
                current_name.clone(),
                Expansion {
                    children,
                    cursor: 0,
                    forgotten: HashMap::new(),
                },
            );
        }

        let mut successor = None;
        if let Some(index) = self.next_pending(current) {
            successor = self.admit_successor(current, index, current_f);
        }

        if self.fresh_pending(current).is_none() {
            self.backup(current);
        }
        if self.next_pending(current).is_some() {
            let pushed = self.frontier.push(&current_name, current, &self.memory);
            debug_assert!(pushed, "popped node still queued");
        }

        let Some(child) = successor else {
            return Ok(());
        };
        while self.frontier.len() >= self.params.max_frontier_size {
            self.evict()?;
        }
        let name = self.memory.tree.name(child);
        let pushed = self.frontier.push(name, child, &self.memory);
        debug_assert!(pushed, "new successor already queued");
        Ok(())
    }

    fn is_pending(&self, child: NodeId) -> bool {
        let memory = &self.memory;
        let name = memory.tree.name(child);
        match memory.live.get(name) {
            None => true,
            Some(&held) => {
                held != child && memory.tree.path_cost(child) < memory.tree.path_cost(held)
            }
        }
    }

    /// Index of the first child of `id` still waiting for its first turn.
    fn fresh_pending(&self, id: NodeId) -> Option<usize> {
        let expansion = self.memory.expansion(id)?;
        (expansion.cursor..expansion.children.len())
            .find(|&index| self.is_pending(expansion.children[index]))
    }

    /// Index of the forgotten child of `id` with the lowest remembered f.
    fn forgotten_pending(&self, id: NodeId) -> Option<usize> {
        let expansion = self.memory.expansion(id)?;
        let mut best: Option<(usize, Bound)> = None;
        for (index, &child) in expansion.children.iter().enumerate() {
            let Some(&remembered) = expansion.forgotten.get(self.memory.tree.name(child)) else {
                continue;
            };
            if !self.is_pending(child) {
                continue;
            }
            if best.map_or(true, |(_, f)| remembered.is_lower_than(f)) {
                best = Some((index, remembered));
            }
        }
        best.map(|(index, _)| index)
    }

    fn next_pending(&self, id: NodeId) -> Option<usize> {
        self.fresh_pending(id).or_else(|| self.forgotten_pending(id))
    }

    /// Put the child at `index` of `parent` in memory with its f-value.
    ///
    /// Returns the child if it must be pushed, or `None` if it replaced a
    /// queued instance of the same state.
    fn admit_successor(&mut self, parent: NodeId, index: usize, parent_f: Bound) -> Option<NodeId> {
        let parent_name = self.memory.tree.name(parent).to_string();
        let expansion = self.memory.successors.get_mut(&parent_name)?;
        let child = expansion.children[index];
        let name = self.memory.tree.name(child).to_string();
        expansion.cursor = expansion.cursor.max(index + 1);
        let remembered = expansion.forgotten.remove(&name);

        let tree = &self.memory.tree;
        let g: Cost = tree.path_cost(child);
        let estimate = Bound::Finite(g.saturating_add(tree.heuristic(child))).max(parent_f);
        let estimate = remembered.map_or(estimate, |value| estimate.max(value));
        let too_deep = tree.depth(child) >= self.params.max_frontier_size
            && !self.env.is_goal(tree.state(child));
        let f = if too_deep {
            self.lost_floor = self.lost_floor.min(estimate);
            Bound::Unbounded
        } else {
            estimate
        };
        trace!(successor = %name, f = %f, depth = tree.depth(child), "generated");

        if let Some(&held) = self.memory.live.get(&name) {
            if held != child && self.memory.successors.contains_key(&name) {
                self.reopen(held);
            }
        }
        self.memory.live.insert(name.clone(), child);
        self.memory.f.insert(name.clone(), f);
        if self.frontier.replace(&name, child, &self.memory) {
            None
        } else {
            Some(child)
        }
    }

    /// Drop the expanded instance `held` together with every node generated
    /// under it, leaving its state free for a cheaper instance.
    fn reopen(&mut self, held: NodeId) {
        let name = self.memory.tree.name(held).to_string();
        trace!(node = %name, cost = self.memory.tree.path_cost(held), "reopened");
        let mut stack: Vec<NodeId> = self.memory.generated(held).collect();
        while let Some(node) = stack.pop() {
            stack.extend(self.memory.generated(node));
            let descendant = self.memory.tree.name(node).to_string();
            self.frontier.remove(&descendant, &self.memory);
            self.memory.live.remove(&descendant);
            self.memory.f.remove(&descendant);
            self.memory.successors.remove(&descendant);
        }
        self.frontier.remove(&name, &self.memory);
        self.memory.successors.remove(&name);
    }

    /// Propagate the best child f of a complete node upwards, stopping at
    /// the first ancestor that is unchanged or not yet complete.
    fn backup(&mut self, start: NodeId) {
        let mut id = start;
        loop {
            let best = self.memory.best_child_f(id);
            let name = self.memory.tree.name(id).to_string();
            if self.memory.f_of(&name) == best {
                return;
            }
            trace!(node = %name, f = %best, "backed up");
            self.memory.f.insert(name.clone(), best);
            self.frontier.fix(&name, &self.memory);

            match self.memory.tree.parent(id) {
                Some(parent)
                    if self.memory.is_live(parent) && self.fresh_pending(parent).is_none() =>
                {
                    id = parent;
                }
                _ => return,
            }
        }
    }

    /// Forget the shallowest of the worst queued leaves, remember its f in
    /// its parent, and re-queue the parent.
    fn evict(&mut self) -> Result<(), SearchError> {
        let memory = &self.memory;
        let victim = self
            .frontier
            .iter()
            .filter(|&(_, id)| memory.tree.parent(id).is_some() && memory.is_leaf(id))
            .map(|(name, id)| (memory.priority(name), id))
            .reduce(|worst, candidate| {
                if candidate.0.ranks_ahead(worst.0, Order::HighestFirst) {
                    candidate
                } else {
                    worst
                }
            })
            .map(|(_, id)| id);
        let Some(victim) = victim else {
            return Err(self.bound_exhausted());
        };

        let name = self.memory.tree.name(victim).to_string();
        let victim_f = self.memory.f_of(&name);
        trace!(node = %name, f = %victim_f, "evicted");
        self.frontier.remove(&name, &self.memory);
        self.memory.live.remove(&name);
        self.memory.f.remove(&name);
        self.memory.successors.remove(&name);

        let Some(parent) = self.memory.tree.parent(victim) else {
            return Ok(());
        };
        if !self.memory.is_live(parent) {
            return Ok(());
        }
        let parent_name = self.memory.tree.name(parent).to_string();
        if let Some(expansion) = self.memory.successors.get_mut(&parent_name) {
            expansion.forgotten.insert(name, victim_f);
        }
        if self.fresh_pending(parent).is_none() {
            self.backup(parent);
        }
        if !self.frontier.contains(&parent_name) {
            let pushed = self.frontier.push(&parent_name, parent, &self.memory);
            debug_assert!(pushed, "parent already queued");
        }
        Ok(())
    }
}
