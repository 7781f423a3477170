//! Grid dimensions, win length and placement rule.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, Move};
use crate::error::ShapeError;

/// How a move chooses its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Any empty cell (tic-tac-toe).
    Free,
    /// A column; the piece lands in its lowest empty row (connect four).
    Drop,
}

/// Validated grid geometry.
///
/// ```
/// use parlor::grid::{GridShape, Placement};
///
/// let shape = GridShape::new(6, 7, 4, Placement::Drop).unwrap();
/// assert_eq!(shape.cell_count(), 42);
/// assert!(GridShape::new(3, 3, 4, Placement::Free).is_err());
/// ```
///
/// Deserializing goes through `GridShape::new`, so a snapshot cannot smuggle
/// in a shape the constructor would refuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ShapeData")]
pub struct GridShape {
    rows: usize,
    cols: usize,
    win_length: usize,
    placement: Placement,
}

/// Unchecked wire form of `GridShape`.
#[derive(Deserialize)]
struct ShapeData {
    rows: usize,
    cols: usize,
    win_length: usize,
    placement: Placement,
}

impl TryFrom<ShapeData> for GridShape {
    type Error = ShapeError;

    fn try_from(data: ShapeData) -> Result<Self, Self::Error> {
        GridShape::new(data.rows, data.cols, data.win_length, data.placement)
    }
}

impl GridShape {
    /// Create a shape, rejecting empty grids and win lengths that cannot fit.
    pub fn new(
        rows: usize,
        cols: usize,
        win_length: usize,
        placement: Placement,
    ) -> Result<Self, ShapeError> {
        if rows == 0 || cols == 0 {
            return Err(ShapeError::Empty { rows, cols });
        }
        if win_length == 0 || win_length > rows.max(cols) {
            return Err(ShapeError::WinLength {
                rows,
                cols,
                win_length,
            });
        }
        Ok(Self {
            rows,
            cols,
            win_length,
            placement,
        })
    }

    /// Six rows, seven columns, four in a row, pieces drop.
    #[must_use]
    pub const fn connect_four() -> Self {
        Self {
            rows: 6,
            cols: 7,
            win_length: 4,
            placement: Placement::Drop,
        }
    }

    /// Three by three, three in a row, free placement.
    #[must_use]
    pub const fn tic_tac_toe() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_length: 3,
            placement: Placement::Free,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Row-major index of an in-bounds coordinate.
    #[must_use]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then_some(coord.row * self.cols + coord.col)
    }

    /// Inverse of `index_of`.
    #[must_use]
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        (index < self.cell_count()).then(|| Coord::new(index / self.cols, index % self.cols))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count()).map(move |i| Coord::new(i / self.cols, i % self.cols))
    }

    /// The move kind this shape's placement rule accepts for a coordinate.
    #[must_use]
    pub fn move_for(&self, coord: Coord) -> Move {
        match self.placement {
            Placement::Free => Move::At(coord),
            Placement::Drop => Move::Column(coord.col),
        }
    }

    /// One-based number a player types for a move.
    ///
    /// Columns count left to right; free cells count row-major from the
    /// top-left.
    #[must_use]
    pub fn number_of(&self, mv: Move) -> Option<usize> {
        match (self.placement, mv) {
            (Placement::Drop, Move::Column(col)) if col < self.cols => Some(col + 1),
            (Placement::Free, Move::At(coord)) => self.index_of(coord).map(|i| i + 1),
            _ => None,
        }
    }

    /// Inverse of `number_of`.
    #[must_use]
    pub fn move_for_number(&self, number: usize) -> Option<Move> {
        let index = number.checked_sub(1)?;
        match self.placement {
            Placement::Drop => (index < self.cols).then_some(Move::Column(index)),
            Placement::Free => self.coord_at(index).map(Move::At),
        }
    }
}
