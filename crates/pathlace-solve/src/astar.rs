use std::collections::BinaryHeap;

use pathlace_core::{Grid, Path};

use crate::Solution;
use crate::solver::{NodeRef, Solver};

impl Solver {
    /// Compute the shortest path from the grid's start to its goal using
    /// A* with the Manhattan heuristic.
    ///
    /// Returns the full route including both endpoints, or
    /// [`Solution::Unreachable`] if no path exists. Grid construction
    /// guarantees distinct start and goal cells.
    ///
    /// Each step costs 1; `f = g + manhattan(cell, goal)`. The open set
    /// pops the lowest `f`, ties broken by lowest `h`, then insertion
    /// order. A node already discovered at equal or better cost is never
    /// reinserted, so the first discovered equal-cost route wins.
    pub fn solve(&mut self, grid: &Grid) -> Solution {
        self.prepare(grid.len());
        let cur_gen = self.generation;

        let start = grid.start();
        let goal = grid.goal();
        let start_idx = Self::flat(grid, start);
        let goal_idx = Self::flat(grid, goal);

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u32 = 0;
        let start_h = start.manhattan(goal);
        open.push(NodeRef {
            idx: start_idx,
            f: start_h,
            h: start_h,
            seq,
        });

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_cell = Self::unflat(grid, ci);

            for np in current_cell.neighbors4() {
                if !grid.is_walkable(np) {
                    continue;
                }
                let ni = Self::flat(grid, np);
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Only a strict improvement re-opens a node; an
                    // equal-cost rediscovery is skipped.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                seq += 1;
                let h = np.manhattan(goal);
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + h,
                    h,
                    seq,
                });
            }
        };

        if !found {
            return Solution::Unreachable;
        }

        // Reconstruct the route by following parents, then reverse.
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            cells.push(Self::unflat(grid, ci));
            ci = self.nodes[ci].parent;
        }
        cells.reverse();
        Solution::Route(Path::from_cells(cells))
    }
}
