//! The immutable level grid.

use crate::cell::CellKind;
use crate::coord::Coord;
use crate::level::{Level, LevelError};

/// A rectangular grid of [`CellKind`], built once per level.
///
/// The grid is immutable after construction and may be shared freely by the
/// solver and the input tracker. [`Grid::is_walkable`] is the single
/// walkability predicate both of them use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<CellKind>,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Build a grid from a level descriptor.
    ///
    /// Wall coordinates outside the grid are silently ignored. If a wall
    /// coincides with the start or goal, the start/goal kind takes
    /// precedence.
    ///
    /// # Errors
    ///
    /// Returns a [`LevelError`] if the dimensions are not positive, the
    /// start or goal lies outside `[0, rows) × [0, cols)`, or start and
    /// goal name the same cell.
    pub fn build(level: &Level) -> Result<Self, LevelError> {
        let Level {
            rows,
            cols,
            ref walls,
            start,
            goal,
        } = *level;

        if rows <= 0 || cols <= 0 {
            return Err(LevelError::Dimensions { rows, cols });
        }
        let in_bounds =
            |c: Coord| c.row >= 0 && c.row < rows && c.col >= 0 && c.col < cols;
        if !in_bounds(start) {
            return Err(LevelError::StartOutOfBounds(start));
        }
        if !in_bounds(goal) {
            return Err(LevelError::GoalOutOfBounds(goal));
        }
        if start == goal {
            return Err(LevelError::StartIsGoal(start));
        }

        let mut cells = vec![CellKind::Empty; (rows * cols) as usize];
        let flat = |c: Coord| (c.row * cols + c.col) as usize;
        for &w in walls {
            if in_bounds(w) {
                cells[flat(w)] = CellKind::Wall;
            }
        }
        // Start/goal override any colliding wall entry.
        cells[flat(start)] = CellKind::Start;
        cells[flat(goal)] = CellKind::Goal;

        Ok(Self {
            rows,
            cols,
            cells,
            start,
            goal,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Never true for a built grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The unique start cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The unique goal cell.
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Whether the coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// The kind of the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, c: Coord) -> Option<CellKind> {
        if !self.contains(c) {
            return None;
        }
        Some(self.cells[(c.row * self.cols + c.col) as usize])
    }

    /// Whether `c` can be stepped on: inside the grid and not a wall.
    ///
    /// This predicate is the single source of truth for both the solver
    /// and the tracker.
    #[inline]
    pub fn is_walkable(&self, c: Coord) -> bool {
        self.kind(c).is_some_and(CellKind::is_walkable)
    }

    /// Row-major iterator over all coordinates of the grid.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }
}
