//! Pixel-to-cell mapping for pointer input.
//!
//! The engine core works purely in cell coordinates; whichever host
//! layer receives pixel events owns the conversion. [`CellLayout`] is
//! that conversion, kept deterministic and documented:
//! `cell = floor((pixel - origin) / cell_size)`, with true flooring for
//! pixels left of / above the origin. Results may fall outside the grid
//! — the tracker rejects those samples silently.

use pathlace_core::Coord;

/// A fixed grid placement in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellLayout {
    /// Pixel x of the grid's left edge.
    pub origin_x: i32,
    /// Pixel y of the grid's top edge.
    pub origin_y: i32,
    /// Cell edge length in pixels. Must be positive.
    pub cell_size: i32,
}

impl CellLayout {
    /// Create a layout. `cell_size` must be positive.
    pub const fn new(origin_x: i32, origin_y: i32, cell_size: i32) -> Self {
        debug_assert!(cell_size > 0);
        Self {
            origin_x,
            origin_y,
            cell_size,
        }
    }

    /// The cell containing the pixel `(px, py)`.
    #[inline]
    pub fn cell_at(&self, px: i32, py: i32) -> Coord {
        Coord::new(
            div_floor(py - self.origin_y, self.cell_size),
            div_floor(px - self.origin_x, self.cell_size),
        )
    }

    /// The pixel of the top-left corner of `cell` (inverse of
    /// [`cell_at`](Self::cell_at) up to flooring).
    #[inline]
    pub fn cell_origin(&self, cell: Coord) -> (i32, i32) {
        (
            self.origin_x + cell.col * self.cell_size,
            self.origin_y + cell.row * self.cell_size,
        )
    }
}

/// Floor division for a positive divisor.
#[inline]
fn div_floor(a: i32, b: i32) -> i32 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}
