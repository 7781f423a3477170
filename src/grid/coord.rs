//! Grid coordinates and moves.

use serde::{Deserialize, Serialize};

/// A zero-based grid position.
///
/// For drop grids row 0 is the bottom row; for free grids it is the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed delta, `None` if either component would go negative.
    ///
    /// Upper bounds are the shape's concern.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move request.
///
/// Free grids take a cell; drop grids take a column and the piece falls to
/// the lowest empty row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    At(Coord),
    Column(usize),
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::At(coord) => write!(f, "cell {coord}"),
            Move::Column(col) => write!(f, "column {}", col + 1),
        }
    }
}
