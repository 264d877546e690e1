//! **pathlace-solve** — optimal route computation for pathlace grids.
//!
//! Provides [`Solver`], which computes the single shortest 4-connected
//! path from a grid's start to its goal using A* with the Manhattan
//! heuristic ([`Solver::solve`]). The result is a [`Solution`]:
//! either a [`Path`](pathlace_core::Path) or `Unreachable` — a normal,
//! non-error outcome for disconnected levels.
//!
//! The search is fully deterministic: the open set pops the lowest `f`,
//! ties broken by lowest `h`, then by insertion order; neighbors are
//! expanded in the fixed up/down/left/right order of
//! [`Coord::neighbors4`](pathlace_core::Coord::neighbors4).
//!
//! [`Solver`] owns and reuses its internal node caches, so repeated
//! queries (level reloads, resets) incur no allocations after warm-up.

mod astar;
mod solution;
mod solver;

pub use solution::Solution;
pub use solver::Solver;
