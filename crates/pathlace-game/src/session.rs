//! Per-level game session — the narrow API the UI layer consumes.

use pathlace_core::{Coord, Grid, Level, LevelError, Path};
use pathlace_solve::{Solution, Solver};

use crate::tracker::{PathTracker, TrackerStatus};

/// A snapshot of the game state for rendering.
///
/// `optimal_steps` is `None` when the goal is unreachable — the UI
/// disables the hint affordance but the player may still trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub status: TrackerStatus,
    pub steps: usize,
    pub optimal_steps: Option<usize>,
}

/// One level's worth of game state: grid, optimal route, player trail.
///
/// The grid and optimal route are computed once at load time and never
/// mutated; loading the next level replaces everything wholesale. The
/// session is the only entry point the rendering layer needs — it
/// forwards pointer samples (already mapped to cells, see
/// [`CellLayout`](crate::CellLayout)) and polls [`GameState`].
pub struct Session {
    grid: Grid,
    solver: Solver,
    solution: Solution,
    tracker: PathTracker,
    show_hint: bool,
}

impl Session {
    /// Build the grid from `level` and eagerly solve it once, for hint
    /// display and scoring.
    ///
    /// # Errors
    ///
    /// Returns a [`LevelError`] for a malformed descriptor; the caller
    /// should refuse to start the level.
    pub fn load(level: &Level) -> Result<Self, LevelError> {
        let grid = Grid::build(level)?;
        let mut solver = Solver::new();
        let solution = solver.solve(&grid);
        log_outcome(&grid, &solution);
        Ok(Self {
            grid,
            solver,
            solution,
            tracker: PathTracker::new(),
            show_hint: false,
        })
    }

    /// Replace the current level, reusing the solver's caches.
    ///
    /// On error the session is left unchanged.
    pub fn load_level(&mut self, level: &Level) -> Result<(), LevelError> {
        let grid = Grid::build(level)?;
        self.solution = self.solver.solve(&grid);
        log_outcome(&grid, &self.solution);
        self.grid = grid;
        self.tracker.clear();
        self.show_hint = false;
        Ok(())
    }

    /// The current level's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The optimal route, or `None` if the goal is unreachable.
    pub fn optimal_path(&self) -> Option<&Path> {
        self.solution.path()
    }

    /// The player's trail so far.
    pub fn player_path(&self) -> &Path {
        self.tracker.trail()
    }

    /// Snapshot for the UI: status, steps taken, optimal steps.
    pub fn state(&self) -> GameState {
        GameState {
            status: self.tracker.status(),
            steps: self.tracker.trail().steps(),
            optimal_steps: self.solution.steps(),
        }
    }

    /// Pointer-down at a cell. Returns whether the sample was accepted.
    pub fn pointer_down(&mut self, cell: Coord) -> bool {
        self.tracker.begin_at(&self.grid, cell)
    }

    /// Pointer-move sample. Returns whether the trail changed.
    pub fn pointer_move(&mut self, cell: Coord) -> bool {
        self.tracker.extend_to(&self.grid, cell)
    }

    /// Pointer-up: the partial trail persists for a later gesture.
    pub fn pointer_up(&mut self) {
        self.tracker.end_gesture();
    }

    /// Flip the hint overlay flag. Purely advisory — no effect on
    /// scoring or win detection.
    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    /// Whether the UI should render the optimal route.
    pub fn hint_visible(&self) -> bool {
        self.show_hint
    }

    /// Discard the player trail, back to `Idle`.
    pub fn clear(&mut self) {
        self.tracker.clear();
    }

    /// Re-solve the level and discard the player trail.
    pub fn reset(&mut self) {
        self.solution = self.solver.solve(&self.grid);
        self.tracker.clear();
    }
}

fn log_outcome(grid: &Grid, solution: &Solution) {
    match solution.steps() {
        Some(n) => log::debug!(
            "level loaded: {}x{}, optimal steps {n}",
            grid.rows(),
            grid.cols()
        ),
        None => log::warn!(
            "level loaded: {}x{}, goal unreachable",
            grid.rows(),
            grid.cols()
        ),
    }
}
