//! The occupancy grid.
//!
//! A `Grid` holds exactly `rows * cols` cells in row-major order. Cells only
//! go from `Empty` to `Marked`; the only way back is `reset`.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, Move};
use super::shape::{GridShape, Placement};
use crate::core::Token;
use crate::error::{GridError, IllegalMove, MoveError, ShapeError};

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Token),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The token marking this cell, if any.
    #[must_use]
    pub const fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Marked(token) => Some(token),
        }
    }
}

/// Fixed-size 2D occupancy grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    shape: GridShape,
    cells: Vec<Cell>,
}

/// Unchecked wire form of `Grid`.
#[derive(Deserialize)]
struct GridData {
    shape: GridShape,
    cells: Vec<Cell>,
}

impl TryFrom<GridData> for Grid {
    type Error = ShapeError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let GridData { shape, cells } = data;
        if cells.len() != shape.cell_count() {
            return Err(ShapeError::CellCount {
                rows: shape.rows(),
                cols: shape.cols(),
                found: cells.len(),
            });
        }
        Ok(Self { shape, cells })
    }
}

impl Grid {
    /// Create a fully empty grid.
    #[must_use]
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            cells: vec![Cell::Empty; shape.cell_count()],
        }
    }

    #[must_use]
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn cell_at(&self, coord: Coord) -> Result<Cell, GridError> {
        self.shape
            .index_of(coord)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds(coord))
    }

    /// Mark an empty cell.
    pub fn place(&mut self, coord: Coord, token: Token) -> Result<(), GridError> {
        let index = self
            .shape
            .index_of(coord)
            .ok_or(GridError::OutOfBounds(coord))?;
        match self.cells[index] {
            Cell::Empty => {
                self.cells[index] = Cell::Marked(token);
                Ok(())
            }
            Cell::Marked(_) => Err(GridError::CellOccupied(coord)),
        }
    }

    /// Empty coordinates, row-major.
    #[must_use]
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.coords_where(Cell::is_empty)
    }

    /// Marked coordinates, row-major.
    #[must_use]
    pub fn marked_coords(&self) -> Vec<Coord> {
        self.coords_where(|cell| !cell.is_empty())
    }

    fn coords_where(&self, keep: impl Fn(Cell) -> bool) -> Vec<Coord> {
        self.shape
            .coords()
            .zip(self.cells.iter())
            .filter(|(_, cell)| keep(**cell))
            .map(|(coord, _)| coord)
            .collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Lowest empty cell in a column, `None` when the column is full.
    pub fn lowest_empty_row(&self, col: usize) -> Result<Option<Coord>, GridError> {
        if col >= self.shape.cols() {
            return Err(GridError::ColumnOutOfBounds(col));
        }
        Ok((0..self.shape.rows())
            .map(|row| Coord::new(row, col))
            .find(|coord| self.cells[coord.row * self.shape.cols() + col].is_empty()))
    }

    /// Columns that can still take a piece, ascending.
    #[must_use]
    pub fn available_columns(&self) -> Vec<usize> {
        (0..self.shape.cols())
            .filter(|&col| matches!(self.lowest_empty_row(col), Ok(Some(_))))
            .collect()
    }

    /// Every move the placement rule allows on the current grid.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.shape.placement() {
            Placement::Free => self.empty_coords().into_iter().map(Move::At).collect(),
            Placement::Drop => self
                .available_columns()
                .into_iter()
                .map(Move::Column)
                .collect(),
        }
    }

    /// The cell a move would mark, without marking it.
    ///
    /// A move of the wrong kind is rejected before bounds are checked.
    pub fn resolve(&self, mv: Move) -> Result<Coord, MoveError> {
        match (self.shape.placement(), mv) {
            (Placement::Free, Move::At(coord)) => match self.cell_at(coord)? {
                Cell::Empty => Ok(coord),
                Cell::Marked(_) => Err(IllegalMove::CellOccupied(coord).into()),
            },
            (Placement::Drop, Move::Column(col)) => self
                .lowest_empty_row(col)?
                .ok_or(MoveError::Illegal(IllegalMove::ColumnFull(col))),
            _ => Err(IllegalMove::WrongKind(mv).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c4() -> Grid {
        Grid::new(GridShape::connect_four())
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = c4();
        assert_eq!(grid.empty_coords().len(), 42);
        assert!(grid.marked_coords().is_empty());
        assert!(!grid.is_full());
        assert_eq!(grid.available_columns(), (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_and_read() {
        let mut grid = c4();
        let at = Coord::new(0, 3);
        grid.place(at, Token::First).unwrap();

        assert_eq!(grid.cell_at(at), Ok(Cell::Marked(Token::First)));
        assert_eq!(grid.place(at, Token::Second), Err(GridError::CellOccupied(at)));
        assert_eq!(grid.cell_at(at), Ok(Cell::Marked(Token::First)));
        assert_eq!(grid.marked_coords(), vec![at]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = c4();
        let outside = Coord::new(6, 0);
        assert_eq!(grid.cell_at(outside), Err(GridError::OutOfBounds(outside)));
        assert_eq!(
            grid.place(outside, Token::First),
            Err(GridError::OutOfBounds(outside))
        );
        assert_eq!(grid.lowest_empty_row(7), Err(GridError::ColumnOutOfBounds(7)));
    }

    #[test]
    fn test_lowest_empty_row_fills_bottom_up() {
        let mut grid = c4();
        for row in 0..6 {
            let coord = grid.lowest_empty_row(2).unwrap().unwrap();
            assert_eq!(coord, Coord::new(row, 2));
            grid.place(coord, Token::First).unwrap();
        }
        assert_eq!(grid.lowest_empty_row(2), Ok(None));
        assert!(!grid.available_columns().contains(&2));
    }

    #[test]
    fn test_reset_clears() {
        let mut grid = Grid::new(GridShape::tic_tac_toe());
        for coord in GridShape::tic_tac_toe().coords() {
            grid.place(coord, Token::Second).unwrap();
        }
        assert!(grid.is_full());
        assert!(grid.legal_moves().is_empty());

        grid.reset();
        assert_eq!(grid.empty_coords().len(), 9);
    }

    #[test]
    fn test_resolve() {
        let mut grid = c4();
        assert_eq!(grid.resolve(Move::Column(0)), Ok(Coord::new(0, 0)));
        assert_eq!(
            grid.resolve(Move::At(Coord::new(0, 0))),
            Err(MoveError::Illegal(IllegalMove::WrongKind(Move::At(Coord::new(0, 0)))))
        );
        assert_eq!(
            grid.resolve(Move::Column(9)),
            Err(MoveError::OutOfBounds(Move::Column(9)))
        );

        for row in 0..6 {
            grid.place(Coord::new(row, 0), Token::First).unwrap();
        }
        assert_eq!(
            grid.resolve(Move::Column(0)),
            Err(MoveError::Illegal(IllegalMove::ColumnFull(0)))
        );
    }

    #[test]
    fn test_deserialize_rejects_short_cells() {
        let json = r#"{"shape":{"rows":3,"cols":3,"win_length":3,"placement":"Free"},"cells":["Empty"]}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("needs 9 cells (got 1)"), "{err}");
    }

    #[test]
    fn test_deserialize_round_trip_keeps_marks() {
        let mut grid = Grid::new(GridShape::tic_tac_toe());
        grid.place(Coord::new(2, 0), Token::Second).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);
    }

    #[test]
    fn test_legal_moves_free_grid() {
        let mut grid = Grid::new(GridShape::tic_tac_toe());
        grid.place(Coord::new(1, 1), Token::First).unwrap();
        let moves = grid.legal_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::At(Coord::new(1, 1))));
        assert_eq!(moves[0], Move::At(Coord::new(0, 0)));
    }
}
