//! Connect Four: six rows, seven columns, four in a row, pieces drop.
//!
//! Columns are numbered 1-7 for players and 0-6 internally. Row 0 is the
//! bottom row.

use crate::core::TokenMap;
use crate::grid::Move;
use crate::rules::{Round, Ruleset};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

#[must_use]
pub fn ruleset() -> Ruleset {
    Ruleset::connect_four()
}

/// Red and yellow discs, drawn as `R` and `Y`.
#[must_use]
pub fn markers() -> TokenMap<char> {
    TokenMap::from_pair('R', 'Y')
}

/// One-based column numbers still open in a round.
#[must_use]
pub fn open_columns(round: &Round) -> Vec<usize> {
    round
        .legal_moves()
        .into_iter()
        .filter_map(|mv| match mv {
            Move::Column(col) => Some(col + 1),
            Move::At(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;
    use crate::grid::Placement;

    #[test]
    fn test_preset_shape() {
        let rules = ruleset();
        assert_eq!(rules.shape().rows(), ROWS);
        assert_eq!(rules.shape().cols(), COLS);
        assert_eq!(rules.shape().win_length(), WIN_LENGTH);
        assert_eq!(rules.shape().placement(), Placement::Drop);
    }

    #[test]
    fn test_open_columns() {
        let rules = ruleset();
        let mut round = Round::new(&rules, Token::First);
        assert_eq!(open_columns(&round), vec![1, 2, 3, 4, 5, 6, 7]);
        for _ in 0..ROWS {
            round.submit_move(Move::Column(0)).unwrap();
        }
        assert_eq!(open_columns(&round), vec![2, 3, 4, 5, 6, 7]);
    }
}
