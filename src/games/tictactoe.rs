//! Tic-Tac-Toe on a 3x3 grid.
//!
//! Squares are numbered 1-9 row-major from the top-left:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```

use crate::grid::{Coord, GridShape, Move};
use crate::rules::{Round, Ruleset};

#[must_use]
pub fn ruleset() -> Ruleset {
    Ruleset::tic_tac_toe()
}

/// Coordinate of a square number, `None` outside 1..=9.
#[must_use]
pub fn square(number: usize) -> Option<Coord> {
    match GridShape::tic_tac_toe().move_for_number(number)? {
        Move::At(coord) => Some(coord),
        Move::Column(_) => None,
    }
}

/// Square number of a coordinate, `None` off the board.
#[must_use]
pub fn square_number(coord: Coord) -> Option<usize> {
    GridShape::tic_tac_toe().number_of(Move::At(coord))
}

/// Open square numbers, ascending.
#[must_use]
pub fn legal_squares(round: &Round) -> Vec<usize> {
    let shape = round.ruleset().shape();
    round
        .legal_moves()
        .into_iter()
        .filter_map(|mv| shape.number_of(mv))
        .collect()
}
