//! Solver state and internal search-node storage.

use pathlace_core::{Coord, Grid};

/// Per-cell search node, indexed by flat cell index.
///
/// Nodes are invalidated lazily by bumping the solver's generation
/// counter instead of clearing the whole array between queries.
#[derive(Clone)]
pub(crate) struct Node {
    /// Steps from start (edge weight 1).
    pub(crate) g: i32,
    /// Flat index of the predecessor, `usize::MAX` for the start node.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Still in the open set (not yet expanded).
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
///
/// The heap pops the entry with the lowest `f`; equal `f` is broken by
/// the lowest heuristic `h`, remaining ties by the lowest insertion
/// sequence number (first pushed wins). This makes the search order, and
/// therefore the returned path, fully deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, h, seq) first.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* shortest-path solver with reusable per-cell caches.
///
/// One `Solver` can serve any number of grids over its lifetime; the
/// node array grows to the largest grid seen and is then reused.
#[derive(Default)]
pub struct Solver {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
}

impl Solver {
    /// Create a solver with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the node array cover `len` cells and start a fresh generation.
    pub(crate) fn prepare(&mut self, len: usize) {
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
    }

    /// Flat index of an in-bounds coordinate.
    #[inline]
    pub(crate) fn flat(grid: &Grid, c: Coord) -> usize {
        (c.row * grid.cols() + c.col) as usize
    }

    /// Coordinate for a flat index.
    #[inline]
    pub(crate) fn unflat(grid: &Grid, idx: usize) -> Coord {
        let cols = grid.cols() as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlace_core::Level;

    #[test]
    fn prepare_grows_then_reuses() {
        let mut s = Solver::new();
        s.prepare(25);
        assert_eq!(s.nodes.len(), 25);
        assert_eq!(s.generation, 1);

        // Smaller request keeps capacity, bumps generation.
        s.prepare(9);
        assert_eq!(s.nodes.len(), 25);
        assert_eq!(s.generation, 2);

        // Larger request reallocates and restarts generations.
        s.prepare(100);
        assert_eq!(s.nodes.len(), 100);
        assert_eq!(s.generation, 1);
    }

    #[test]
    fn flat_round_trip() {
        let grid = Grid::build(&Level::from_text("S..\n...\n..G").unwrap()).unwrap();
        for c in grid.coords() {
            assert_eq!(Solver::unflat(&grid, Solver::flat(&grid, c)), c);
        }
    }
}
