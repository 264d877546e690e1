//! Ordered cell sequences.

use crate::coord::Coord;

/// An ordered sequence of grid cells.
///
/// Used both for the solver's optimal route (immutable once computed) and
/// for the player's trail (grown by appending, shrunk by truncation). A
/// well-formed path has Manhattan-adjacent consecutive entries and no
/// consecutive duplicates; the tracker maintains this by construction and
/// [`Path::is_connected`] checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Coord>);

impl Path {
    /// An empty path.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A path over the given cells, in order.
    pub fn from_cells(cells: Vec<Coord>) -> Self {
        Self(cells)
    }

    /// The cells of the path, in order.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps: one less than the number of cells, zero if empty.
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// The first cell, if any.
    #[inline]
    pub fn first(&self) -> Option<Coord> {
        self.0.first().copied()
    }

    /// The last cell, if any.
    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.0.last().copied()
    }

    /// The index of `c` in the path, if present.
    #[inline]
    pub fn position_of(&self, c: Coord) -> Option<usize> {
        self.0.iter().position(|&p| p == c)
    }

    /// Whether the path visits `c`.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.0.contains(&c)
    }

    /// Append a cell.
    #[inline]
    pub fn push(&mut self, c: Coord) {
        self.0.push(c);
    }

    /// Truncate the path so that it ends at index `idx` (inclusive).
    #[inline]
    pub fn truncate_to(&mut self, idx: usize) {
        self.0.truncate(idx + 1);
    }

    /// Remove all cells.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.0.iter().copied()
    }

    /// Whether every consecutive pair of cells is Manhattan-adjacent.
    ///
    /// Trivially true for empty and single-cell paths.
    pub fn is_connected(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Coord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Coord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
