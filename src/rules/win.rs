//! Win and draw detection.
//!
//! A line wins when every one of its `win_length` cells is marked by the
//! same token. Lines of any other length never win, even if a caller
//! hands in a catalog built for a different shape.

use crate::core::Token;
use crate::grid::{Cell, Grid, Line, LineCatalog};

/// The token owning every cell of a line, if one does.
#[must_use]
pub fn line_owner(grid: &Grid, line: &Line, win_length: usize) -> Option<Token> {
    if line.len() != win_length {
        return None;
    }
    let mut cells = line.iter().map(|coord| grid.cell_at(*coord));
    let owner = match cells.next()? {
        Ok(Cell::Marked(token)) => token,
        _ => return None,
    };
    cells
        .all(|cell| cell == Ok(Cell::Marked(owner)))
        .then_some(owner)
}

/// First catalog line owned by a single token.
#[must_use]
pub fn winning_line<'c>(grid: &Grid, catalog: &'c LineCatalog) -> Option<(Token, &'c Line)> {
    catalog.iter().find_map(|line| {
        line_owner(grid, line, catalog.win_length()).map(|token| (token, line))
    })
}

#[must_use]
pub fn winner(grid: &Grid, catalog: &LineCatalog) -> Option<Token> {
    winning_line(grid, catalog).map(|(token, _)| token)
}

/// Full grid, no winner.
#[must_use]
pub fn is_draw(grid: &Grid, catalog: &LineCatalog) -> bool {
    grid.is_full() && winner(grid, catalog).is_none()
}

/// Occupancy counts along one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineTally {
    pub first: usize,
    pub second: usize,
    pub empty: usize,
}

impl LineTally {
    #[must_use]
    pub fn of(grid: &Grid, line: &Line) -> Self {
        let mut tally = Self::default();
        for coord in line {
            match grid.cell_at(*coord) {
                Ok(Cell::Empty) => tally.empty += 1,
                Ok(Cell::Marked(Token::First)) => tally.first += 1,
                Ok(Cell::Marked(Token::Second)) => tally.second += 1,
                Err(_) => {}
            }
        }
        tally
    }

    #[must_use]
    pub fn marks(&self, token: Token) -> usize {
        match token {
            Token::First => self.first,
            Token::Second => self.second,
        }
    }

    /// One empty cell away from a win for `token`.
    #[must_use]
    pub fn is_threat(&self, token: Token, win_length: usize) -> bool {
        self.empty == 1 && self.marks(token) + 1 == win_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Coord, GridShape};
    use smallvec::smallvec;

    fn ttt() -> (Grid, LineCatalog) {
        let shape = GridShape::tic_tac_toe();
        (Grid::new(shape), LineCatalog::new(&shape))
    }

    #[test]
    fn test_empty_grid_has_no_winner() {
        let (grid, catalog) = ttt();
        assert_eq!(winner(&grid, &catalog), None);
        assert!(!is_draw(&grid, &catalog));
    }

    #[test]
    fn test_row_win() {
        let (mut grid, catalog) = ttt();
        for col in 0..3 {
            grid.place(Coord::new(1, col), Token::Second).unwrap();
        }
        let (token, line) = winning_line(&grid, &catalog).unwrap();
        assert_eq!(token, Token::Second);
        assert_eq!(line[0], Coord::new(1, 0));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let (mut grid, catalog) = ttt();
        grid.place(Coord::new(0, 0), Token::First).unwrap();
        grid.place(Coord::new(0, 1), Token::First).unwrap();
        grid.place(Coord::new(0, 2), Token::Second).unwrap();
        assert_eq!(winner(&grid, &catalog), None);
    }

    #[test]
    fn test_wrong_length_line_never_wins() {
        let (mut grid, _) = ttt();
        grid.place(Coord::new(0, 0), Token::First).unwrap();
        grid.place(Coord::new(0, 1), Token::First).unwrap();
        let short: Line = smallvec![Coord::new(0, 0), Coord::new(0, 1)];
        assert_eq!(line_owner(&grid, &short, 3), None);
        assert_eq!(line_owner(&grid, &short, 2), Some(Token::First));
    }

    #[test]
    fn test_draw() {
        let (mut grid, catalog) = ttt();
        // X O X / X O O / O X X
        let layout = [
            Token::First,
            Token::Second,
            Token::First,
            Token::First,
            Token::Second,
            Token::Second,
            Token::Second,
            Token::First,
            Token::First,
        ];
        for (coord, token) in GridShape::tic_tac_toe().coords().zip(layout) {
            grid.place(coord, token).unwrap();
        }
        assert_eq!(winner(&grid, &catalog), None);
        assert!(is_draw(&grid, &catalog));
    }

    #[test]
    fn test_tally_threat() {
        let (mut grid, catalog) = ttt();
        grid.place(Coord::new(0, 0), Token::First).unwrap();
        grid.place(Coord::new(0, 1), Token::First).unwrap();
        let tally = LineTally::of(&grid, catalog.get(0).unwrap());
        assert_eq!(
            tally,
            LineTally {
                first: 2,
                second: 0,
                empty: 1
            }
        );
        assert!(tally.is_threat(Token::First, 3));
        assert!(!tally.is_threat(Token::Second, 3));
    }
}
