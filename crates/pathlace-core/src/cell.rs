//! Per-cell terrain kinds.

/// The kind of a grid cell, fixed at grid construction.
///
/// `Start` and `Goal` are traversable — for adjacency and search purposes
/// they behave exactly like `Empty`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Open floor.
    #[default]
    Empty,
    /// Impassable wall.
    Wall,
    /// The unique cell a trace must begin on.
    Start,
    /// The unique cell a trace must reach.
    Goal,
}

impl CellKind {
    /// Whether this kind can be stepped on. Everything but walls.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// The character used for this kind in the ASCII level format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::Goal => 'G',
        }
    }
}
