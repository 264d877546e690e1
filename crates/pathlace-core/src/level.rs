//! Declarative level descriptors.
//!
//! A [`Level`] fully determines a [`Grid`](crate::Grid): dimensions, wall
//! coordinates, start and goal. Levels can be constructed directly, parsed
//! from an ASCII map with [`Level::from_text`], or (with the `serde`
//! feature) deserialized from data files.

use std::fmt;

use crate::coord::Coord;

/// A declarative level description.
///
/// Validation happens at grid build time, not here: a `Level` is plain
/// data and may describe an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub rows: i32,
    pub cols: i32,
    pub walls: Vec<Coord>,
    pub start: Coord,
    pub goal: Coord,
}

impl Level {
    /// Create a level descriptor from its parts.
    pub fn new(rows: i32, cols: i32, walls: Vec<Coord>, start: Coord, goal: Coord) -> Self {
        Self {
            rows,
            cols,
            walls,
            start,
            goal,
        }
    }

    /// Parse a level from an ASCII map.
    ///
    /// Lines are separated by `'\n'` and must all have the same width.
    /// Leading/trailing whitespace is trimmed from the whole string but
    /// not from individual lines. Recognized characters:
    ///
    /// - `.` open floor
    /// - `#` wall
    /// - `S` start (exactly one)
    /// - `G` goal (exactly one)
    pub fn from_text(s: &str) -> Result<Self, ParseLevelError> {
        let s = s.trim();
        let mut walls = Vec::new();
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;
        let mut cols: i32 = -1;
        let mut row: i32 = 0;

        for line in s.lines() {
            let mut width: i32 = 0;
            for ch in line.chars() {
                let at = Coord::new(row, width);
                match ch {
                    '.' => {}
                    '#' => walls.push(at),
                    'S' => {
                        if start.replace(at).is_some() {
                            return Err(ParseLevelError::DuplicateStart(at));
                        }
                    }
                    'G' => {
                        if goal.replace(at).is_some() {
                            return Err(ParseLevelError::DuplicateGoal(at));
                        }
                    }
                    _ => return Err(ParseLevelError::InvalidRune { ch, at }),
                }
                width += 1;
            }
            if cols < 0 {
                cols = width;
            } else if width != cols {
                return Err(ParseLevelError::InconsistentWidth { line: row as usize });
            }
            row += 1;
        }

        let start = start.ok_or(ParseLevelError::MissingStart)?;
        let goal = goal.ok_or(ParseLevelError::MissingGoal)?;
        Ok(Self {
            rows: row,
            cols: cols.max(0),
            walls,
            start,
            goal,
        })
    }
}

/// Errors detected when building a grid from a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Rows or columns are not positive.
    Dimensions { rows: i32, cols: i32 },
    /// The start coordinate lies outside the grid.
    StartOutOfBounds(Coord),
    /// The goal coordinate lies outside the grid.
    GoalOutOfBounds(Coord),
    /// Start and goal name the same cell.
    StartIsGoal(Coord),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions { rows, cols } => {
                write!(f, "level dimensions must be positive, got {rows}x{cols}")
            }
            Self::StartOutOfBounds(c) => write!(f, "start {c} is out of bounds"),
            Self::GoalOutOfBounds(c) => write!(f, "goal {c} is out of bounds"),
            Self::StartIsGoal(c) => write!(f, "start and goal are both {c}"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Errors that can occur when parsing the ASCII level format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLevelError {
    /// Lines have inconsistent widths.
    InconsistentWidth { line: usize },
    /// A character outside the level alphabet was found.
    InvalidRune { ch: char, at: Coord },
    /// No `S` cell present.
    MissingStart,
    /// No `G` cell present.
    MissingGoal,
    /// More than one `S` cell.
    DuplicateStart(Coord),
    /// More than one `G` cell.
    DuplicateGoal(Coord),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth { line } => {
                write!(f, "level line {line} has inconsistent width")
            }
            Self::InvalidRune { ch, at } => {
                write!(f, "level contains invalid rune \u{201c}{ch}\u{201d} at {at}")
            }
            Self::MissingStart => write!(f, "level has no start cell"),
            Self::MissingGoal => write!(f, "level has no goal cell"),
            Self::DuplicateStart(c) => write!(f, "level has a second start cell at {c}"),
            Self::DuplicateGoal(c) => write!(f, "level has a second goal cell at {c}"),
        }
    }
}

impl std::error::Error for ParseLevelError {}
