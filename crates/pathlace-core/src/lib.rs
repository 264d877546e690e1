//! **pathlace-core** — data model for the pathlace grid puzzle.
//!
//! This crate provides the foundational types shared by the solver and the
//! player-input tracker:
//!
//! - [`Coord`] — integer grid coordinates with 4-way neighbor enumeration
//! - [`CellKind`] — the per-cell terrain kind (empty, wall, start, goal)
//! - [`Level`] — a declarative level descriptor, also parseable from ASCII
//! - [`Grid`] — an immutable rectangular grid built from a [`Level`]
//! - [`Path`] — an ordered sequence of cells (optimal route or player trail)
//!
//! A [`Grid`] is built once per level and never mutated afterwards, so it
//! can be shared freely between the solver and the tracker. The walkability
//! predicate [`Grid::is_walkable`] is the single source of truth for both.

pub mod cell;
pub mod coord;
pub mod grid;
pub mod level;
pub mod path;

pub use cell::CellKind;
pub use coord::Coord;
pub use grid::Grid;
pub use level::{Level, LevelError, ParseLevelError};
pub use path::Path;
