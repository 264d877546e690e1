//! Grid coordinates.

use std::fmt;

/// A 2D integer grid coordinate. Rows grow downward, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// This is the exact shortest-path cost on an obstacle-free
    /// 4-connected grid, which makes it an admissible and consistent
    /// A* heuristic there.
    #[inline]
    pub const fn manhattan(self, other: Self) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four cardinal neighbors, in fixed order: up, down, left, right.
    ///
    /// The order is part of the contract — the solver relies on it for
    /// reproducible tie-breaking.
    #[inline]
    pub const fn neighbors4(self) -> [Coord; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
        ]
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        let a = Coord::new(0, 0);
        let b = Coord::new(2, 3);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let c = Coord::new(4, 7);
        assert_eq!(
            c.neighbors4(),
            [
                Coord::new(3, 7),
                Coord::new(5, 7),
                Coord::new(4, 6),
                Coord::new(4, 8),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(c.is_adjacent(Coord::new(1, 2)));
        // Diagonal and self are not adjacent.
        assert!(!c.is_adjacent(Coord::new(0, 0)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn row_major_ordering() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 2)];
        v.sort();
        assert_eq!(
            v,
            vec![Coord::new(0, 2), Coord::new(0, 5), Coord::new(1, 0)]
        );
    }
}
