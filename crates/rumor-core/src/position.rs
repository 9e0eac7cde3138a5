//! Lattice coordinates.

use std::fmt;

/// A `(row, col)` cell coordinate on an `N×N` lattice.
///
/// `Copy + Ord + Hash` so positions work as map keys and sort in row-major
/// order without ceremony.  Ordering is derived field-by-field, so sorting a
/// `Vec<Position>` yields raster order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the flat row-major index `index` on a lattice of side `size`.
    #[inline]
    pub fn from_index(index: usize, size: usize) -> Self {
        Self { row: index / size, col: index % size }
    }

    /// Flat row-major index on a lattice of side `size`.
    #[inline]
    pub fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// `true` if the position lies inside a lattice of side `size`.
    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Apply a signed `(d_row, d_col)` offset.
    ///
    /// Returns `None` when the result would fall off the low edge; the high
    /// edge is checked separately by [`in_bounds`](Self::in_bounds).
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
