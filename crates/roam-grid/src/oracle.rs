//! Path oracle trait and the default breadth-first implementation.
//!
//! # Pluggability
//!
//! Agents ask for paths through the [`PathOracle`] trait and never look inside
//! the search.  Swap in A*, jump-point search or a precomputed table without
//! touching the movement code.
//!
//! # Result shape
//!
//! A successful query returns the **goal** node.  Each node links to the node
//! it was reached from, ending at the origin (the node with no parent).  The
//! caller walks the chain once, copies what it needs, and drops it.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use roam_core::Cell;

use crate::{GridError, GridResult, Region};

// ── PathNode ──────────────────────────────────────────────────────────────────

/// One node of a parent-linked path, goal first.
#[derive(Debug, PartialEq, Eq)]
pub struct PathNode {
    pub pos: Cell,
    pub parent: Option<Box<PathNode>>,
}

impl PathNode {
    /// The origin of a path: a node with no parent.
    pub fn origin(pos: Cell) -> Self {
        Self { pos, parent: None }
    }

    /// Build a chain from cells listed origin → goal.  Returns the goal node,
    /// or `None` for an empty slice.
    pub fn from_travel_order(cells: &[Cell]) -> Option<Self> {
        let (&first, rest) = cells.split_first()?;
        let mut node = PathNode::origin(first);
        for &pos in rest {
            node = PathNode { pos, parent: Some(Box::new(node)) };
        }
        Some(node)
    }

    /// Iterate from this node back to the origin.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Number of nodes in the chain, origin included.
    pub fn len(&self) -> usize {
        self.ancestors().count()
    }

    /// `true` for a single-node chain (start equals goal).
    pub fn is_origin(&self) -> bool {
        self.parent.is_none()
    }

    /// Consume the chain and return its cells origin → goal.
    pub fn into_travel_order(mut self) -> Vec<Cell> {
        let mut cells = vec![self.pos];
        let mut next = self.parent.take();
        while let Some(mut node) = next {
            cells.push(node.pos);
            next = node.parent.take();
        }
        cells.reverse();
        cells
    }
}

impl Drop for PathNode {
    // Unlink iteratively; the default recursive drop is one stack frame per node.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(mut node) = next {
            next = node.parent.take();
        }
    }
}

/// Iterator returned by [`PathNode::ancestors`].
pub struct Ancestors<'a> {
    next: Option<&'a PathNode>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a PathNode;

    fn next(&mut self) -> Option<&'a PathNode> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}

// ── PathOracle trait ──────────────────────────────────────────────────────────

/// Pluggable grid path search.
pub trait PathOracle {
    /// Find a path from `start` to `goal` through accessible cells of
    /// `region`.
    ///
    /// Returns the goal node of a parent-linked chain ending at `start`, or
    /// [`GridError::NoPath`].  `start == goal` yields a single origin node.
    fn find_path(&self, start: Cell, goal: Cell, region: &dyn Region) -> GridResult<PathNode>;
}

// ── BfsOracle ─────────────────────────────────────────────────────────────────

/// 4-connected breadth-first search.
///
/// Returns a shortest path in steps.  Ties are broken by the fixed neighbor
/// order of [`Cell::neighbors4`], so results are deterministic.
///
/// The start cell itself need not be accessible: students settle on jittered
/// waypoints, and flooring one near the edge of the walkable area can land
/// just outside it.  From an inaccessible start the first step may also be
/// diagonal, so a student floored into the corner outside `(0, 0)` still
/// reaches the grid.  Every other cell on the path is accessible and every
/// later step is edge-adjacent.
#[derive(Copy, Clone, Debug, Default)]
pub struct BfsOracle;

impl PathOracle for BfsOracle {
    fn find_path(&self, start: Cell, goal: Cell, region: &dyn Region) -> GridResult<PathNode> {
        bfs(start, goal, region)
    }
}

fn bfs(start: Cell, goal: Cell, region: &dyn Region) -> GridResult<PathNode> {
    if start == goal {
        return Ok(PathNode::origin(start));
    }
    if !region.is_accessible(goal) {
        return Err(GridError::NoPath { from: start, to: goal });
    }

    // came_from[c] = cell we reached c from.  Presence doubles as "visited".
    let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();
    came_from.insert(start, start);

    let stranded = !region.is_accessible(start);
    let mut frontier = VecDeque::from([start]);
    while let Some(cell) = frontier.pop_front() {
        // Diagonals only on the way off a stranded start.
        let fan = if stranded && cell == start { 8 } else { 4 };
        for &next in &cell.neighbors8()[..fan] {
            if came_from.contains_key(&next) || !region.is_accessible(next) {
                continue;
            }
            came_from.insert(next, cell);
            if next == goal {
                return Ok(reconstruct(&came_from, start, goal));
            }
            frontier.push_back(next);
        }
    }

    Err(GridError::NoPath { from: start, to: goal })
}

fn reconstruct(came_from: &FxHashMap<Cell, Cell>, start: Cell, goal: Cell) -> PathNode {
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = came_from[&cur];
        cells.push(cur);
    }
    cells.reverse();
    // Non-empty: `cells` holds at least `goal`.
    PathNode::from_travel_order(&cells).unwrap_or_else(|| PathNode::origin(goal))
}
