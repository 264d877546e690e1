//! The player path state machine.

use pathlace_core::{Coord, Grid, Path};

/// Tracker status.
///
/// There is no failure state: invalid input samples are silently
/// ignored and the status is unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackerStatus {
    /// No trail yet.
    #[default]
    Idle,
    /// A trail exists; its last cell is the most recent accepted sample.
    Drawing,
    /// The goal was reached. Input is ignored until [`PathTracker::clear`].
    Won,
}

/// Tracks the player-drawn path, one input sample at a time.
///
/// The tracker never owns the grid; each transition takes it by
/// reference. After every accepted sample the trail is a connected
/// sequence of walkable cells beginning at the grid's start.
#[derive(Debug, Clone, Default)]
pub struct PathTracker {
    trail: Path,
    status: TrackerStatus,
}

impl PathTracker {
    /// Create an idle tracker with an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[inline]
    pub fn status(&self) -> TrackerStatus {
        self.status
    }

    /// The player trail drawn so far.
    #[inline]
    pub fn trail(&self) -> &Path {
        &self.trail
    }

    /// Begin a trace at `cell` (pointer-down).
    ///
    /// Accepted only on the grid's start cell while not `Won`; the trail
    /// is reset to just the start cell. Any other cell is a silent no-op,
    /// which leaves a partial trail from an earlier gesture intact so the
    /// player can lift and resume from its tip.
    ///
    /// Returns whether the sample was accepted.
    pub fn begin_at(&mut self, grid: &Grid, cell: Coord) -> bool {
        if self.status == TrackerStatus::Won {
            return false;
        }
        if cell != grid.start() {
            return false;
        }
        self.trail.clear();
        self.trail.push(grid.start());
        self.status = TrackerStatus::Drawing;
        true
    }

    /// Extend the trail to `cell` (every pointer-move sample).
    ///
    /// Rejected (silent no-op) unless drawing, the cell is walkable, and
    /// it is 4-adjacent to the trail's last cell — a jump over empty
    /// space never registers. Re-crossing any earlier trail cell
    /// truncates the trail back to that cell, erasing everything after
    /// it, loops included. Reaching the goal transitions to `Won` and
    /// freezes the trail.
    ///
    /// Returns whether the sample changed the trail.
    pub fn extend_to(&mut self, grid: &Grid, cell: Coord) -> bool {
        if self.status != TrackerStatus::Drawing {
            return false;
        }
        if !grid.is_walkable(cell) {
            return false;
        }
        let Some(last) = self.trail.last() else {
            return false;
        };
        if !last.is_adjacent(cell) {
            return false;
        }

        match self.trail.position_of(cell) {
            // Backtrack: snap the trail back to the re-crossed cell.
            Some(idx) => self.trail.truncate_to(idx),
            None => self.trail.push(cell),
        }

        if cell == grid.goal() {
            self.status = TrackerStatus::Won;
        }
        true
    }

    /// End the current gesture (pointer-up).
    ///
    /// The partial trail persists and the status stays `Drawing`, so a
    /// later gesture can resume tracing from the tip.
    pub fn end_gesture(&mut self) {
        // Lifting the pointer changes nothing; only clear() discards.
    }

    /// Reset to `Idle` with an empty trail. Callable at any time.
    pub fn clear(&mut self) {
        self.trail.clear();
        self.status = TrackerStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use pathlace_core::Level;

    use super::*;

    fn grid(map: &str) -> Grid {
        Grid::build(&Level::from_text(map).unwrap()).unwrap()
    }

    fn open_3x3() -> Grid {
        grid("S..\n...\n..G")
    }

    #[test]
    fn begin_only_at_start() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        assert!(!t.begin_at(&g, Coord::new(1, 1)));
        assert_eq!(t.status(), TrackerStatus::Idle);
        assert!(t.trail().is_empty());

        assert!(t.begin_at(&g, g.start()));
        assert_eq!(t.status(), TrackerStatus::Drawing);
        assert_eq!(t.trail().cells(), &[g.start()]);
    }

    #[test]
    fn begin_resets_an_existing_trail() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        t.extend_to(&g, Coord::new(0, 1));
        t.extend_to(&g, Coord::new(0, 2));
        assert_eq!(t.trail().len(), 3);

        assert!(t.begin_at(&g, g.start()));
        assert_eq!(t.trail().cells(), &[g.start()]);
    }

    #[test]
    fn extend_requires_drawing() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        assert!(!t.extend_to(&g, Coord::new(0, 1)));
        assert!(t.trail().is_empty());
    }

    #[test]
    fn extend_rejects_walls_and_off_grid() {
        let g = grid("S#.\n...\n..G");
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        assert!(!t.extend_to(&g, Coord::new(0, 1))); // wall
        assert!(!t.extend_to(&g, Coord::new(-1, 0))); // off-grid
        assert!(!t.extend_to(&g, Coord::new(0, -1))); // off-grid
        assert_eq!(t.trail().cells(), &[g.start()]);
        assert_eq!(t.status(), TrackerStatus::Drawing);
    }

    #[test]
    fn extend_rejects_jumps() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        assert!(!t.extend_to(&g, Coord::new(0, 2))); // two cells away
        assert!(!t.extend_to(&g, Coord::new(1, 1))); // diagonal
        assert!(!t.extend_to(&g, g.start())); // same cell
        assert_eq!(t.trail().len(), 1);
    }

    #[test]
    fn extend_appends_adjacent_cells() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        assert!(t.extend_to(&g, Coord::new(0, 1)));
        assert!(t.extend_to(&g, Coord::new(1, 1)));
        assert_eq!(
            t.trail().cells(),
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn backtrack_truncates_to_revisited_cell() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        t.extend_to(&g, Coord::new(1, 0)); // A
        t.extend_to(&g, Coord::new(1, 1)); // B
        t.extend_to(&g, Coord::new(1, 2)); // C
        // Step back onto B: everything after it is erased.
        assert!(t.extend_to(&g, Coord::new(1, 1)));
        assert_eq!(
            t.trail().cells(),
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn backtrack_erases_loops() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        // Loop around the center: (0,0) (0,1) (1,1) (1,0), then step back
        // onto the start — the whole loop collapses.
        t.extend_to(&g, Coord::new(0, 1));
        t.extend_to(&g, Coord::new(1, 1));
        t.extend_to(&g, Coord::new(1, 0));
        assert!(t.extend_to(&g, Coord::new(0, 0)));
        assert_eq!(t.trail().cells(), &[g.start()]);
        assert_eq!(t.status(), TrackerStatus::Drawing);
    }

    #[test]
    fn reaching_the_goal_wins_and_freezes() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        t.extend_to(&g, Coord::new(0, 1));
        t.extend_to(&g, Coord::new(0, 2));
        t.extend_to(&g, Coord::new(1, 2));
        assert!(t.extend_to(&g, Coord::new(2, 2)));
        assert_eq!(t.status(), TrackerStatus::Won);
        assert_eq!(t.trail().steps(), 4);

        // Frozen: no further extends, no restarts, gesture end is inert.
        let snapshot = t.trail().clone();
        assert!(!t.extend_to(&g, Coord::new(2, 1)));
        assert!(!t.begin_at(&g, g.start()));
        t.end_gesture();
        assert_eq!(t.status(), TrackerStatus::Won);
        assert_eq!(t.trail(), &snapshot);
    }

    #[test]
    fn clear_resets_from_any_state() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        t.extend_to(&g, Coord::new(1, 0));
        t.clear();
        assert_eq!(t.status(), TrackerStatus::Idle);
        assert!(t.trail().is_empty());

        // After a win too.
        t.begin_at(&g, g.start());
        for c in [
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(1, 2),
            Coord::new(2, 2),
        ] {
            t.extend_to(&g, c);
        }
        assert_eq!(t.status(), TrackerStatus::Won);
        t.clear();
        assert_eq!(t.status(), TrackerStatus::Idle);
        assert!(t.begin_at(&g, g.start()));
    }

    #[test]
    fn gesture_end_keeps_partial_trail() {
        let g = open_3x3();
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        t.extend_to(&g, Coord::new(1, 0));
        t.end_gesture();
        assert_eq!(t.status(), TrackerStatus::Drawing);
        assert_eq!(t.trail().len(), 2);
        // Resume from the tip without a new begin.
        assert!(t.extend_to(&g, Coord::new(2, 0)));
        assert_eq!(t.trail().len(), 3);
    }

    #[test]
    fn trail_stays_connected_and_walkable_under_noisy_input() {
        let g = grid("S.#.\n.#..\n....\n.#.G");
        let mut t = PathTracker::new();
        t.begin_at(&g, g.start());
        // A mix of valid moves, walls, jumps, off-grid samples and
        // backtracks, in the order a drag might deliver them.
        let samples = [
            Coord::new(0, 1),
            Coord::new(0, 2),  // wall
            Coord::new(1, 1),  // wall
            Coord::new(2, 1),  // jump
            Coord::new(-1, 1), // off-grid
            Coord::new(1, 0),  // not adjacent to (0,1) -- rejected
            Coord::new(0, 0),  // backtrack to start
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(2, 1),
            Coord::new(3, 1), // wall
            Coord::new(2, 2),
        ];
        for s in samples {
            t.extend_to(&g, s);
            assert!(t.trail().is_connected());
            assert!(t.trail().iter().all(|c| g.is_walkable(c)));
            assert_eq!(t.trail().first(), Some(g.start()));
        }
        assert_eq!(t.trail().last(), Some(Coord::new(2, 2)));
    }
}
