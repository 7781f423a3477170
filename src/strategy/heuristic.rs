//! Rule-based computer player.
//!
//! Priority, highest first:
//!
//! 1. a move that completes one of its own lines
//! 2. a move that fills the last gap in an opponent line
//! 3. the centre (centre cell, or middle column on drop grids)
//! 4. any legal move, uniformly
//!
//! Ties within a priority go to the first legal move in the order given.

use super::MoveStrategy;
use crate::core::{GameRng, Token};
use crate::error::StrategyError;
use crate::grid::{Coord, Grid, Move, Placement};
use crate::rules::{LineTally, Ruleset};

#[derive(Clone, Debug)]
pub struct BlockOrWin {
    name: String,
    ruleset: Ruleset,
    token: Token,
    rng: GameRng,
}

impl BlockOrWin {
    #[must_use]
    pub fn new(ruleset: &Ruleset, token: Token, rng: GameRng) -> Self {
        Self {
            name: "Computer".to_string(),
            ruleset: ruleset.clone(),
            token,
            rng,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// First legal move that completes a line for `token`.
    fn completing_move(&self, grid: &Grid, legal: &[Move], token: Token) -> Option<Move> {
        let catalog = self.ruleset.catalog();
        legal.iter().copied().find(|mv| {
            grid.resolve(*mv).is_ok_and(|coord| {
                catalog.lines_through(coord).any(|line| {
                    LineTally::of(grid, line).is_threat(token, catalog.win_length())
                })
            })
        })
    }

    fn centre(&self, grid: &Grid) -> Move {
        let shape = grid.shape();
        match shape.placement() {
            Placement::Free => Move::At(Coord::new(shape.rows() / 2, shape.cols() / 2)),
            Placement::Drop => Move::Column(shape.cols() / 2),
        }
    }
}

impl MoveStrategy for BlockOrWin {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, grid: &Grid, legal: &[Move]) -> Result<Move, StrategyError> {
        if legal.is_empty() {
            return Err(StrategyError::NoLegalMoves);
        }
        if let Some(mv) = self.completing_move(grid, legal, self.token) {
            return Ok(mv);
        }
        if let Some(mv) = self.completing_move(grid, legal, self.token.other()) {
            return Ok(mv);
        }
        let centre = self.centre(grid);
        if legal.contains(&centre) {
            return Ok(centre);
        }
        self.rng
            .choose(legal)
            .copied()
            .ok_or(StrategyError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Round;

    fn at(row: usize, col: usize) -> Move {
        Move::At(Coord::new(row, col))
    }

    #[test]
    fn test_takes_centre_first() {
        let ruleset = Ruleset::tic_tac_toe();
        let round = Round::new(&ruleset, Token::Second);
        let mut bot = BlockOrWin::new(&ruleset, Token::Second, GameRng::new(1));
        let mv = bot.choose_move(round.grid(), &round.legal_moves()).unwrap();
        assert_eq!(mv, at(1, 1));
    }

    #[test]
    fn test_blocks_opponent() {
        let ruleset = Ruleset::tic_tac_toe();
        let mut round = Round::new(&ruleset, Token::First);
        round.submit_move(at(0, 0)).unwrap();
        round.submit_move(at(1, 1)).unwrap();
        round.submit_move(at(0, 1)).unwrap();

        let mut bot = BlockOrWin::new(&ruleset, Token::Second, GameRng::new(1));
        let mv = bot.choose_move(round.grid(), &round.legal_moves()).unwrap();
        assert_eq!(mv, at(0, 2));
    }

    #[test]
    fn test_prefers_win_over_block() {
        let ruleset = Ruleset::tic_tac_toe();
        let mut round = Round::new(&ruleset, Token::First);
        // X at (0,0),(0,1); O at (1,0),(1,1); X plays (2,2); O to move.
        for mv in [at(0, 0), at(1, 0), at(0, 1), at(1, 1), at(2, 2)] {
            round.submit_move(mv).unwrap();
        }
        let mut bot = BlockOrWin::new(&ruleset, Token::Second, GameRng::new(1));
        let mv = bot.choose_move(round.grid(), &round.legal_moves()).unwrap();
        assert_eq!(mv, at(1, 2));
    }

    #[test]
    fn test_blocks_connect_four_column() {
        let ruleset = Ruleset::connect_four();
        let mut round = Round::new(&ruleset, Token::First);
        for col in [2, 5, 2, 6, 2] {
            round.submit_move(Move::Column(col)).unwrap();
        }
        let mut bot = BlockOrWin::new(&ruleset, Token::Second, GameRng::new(1));
        let mv = bot.choose_move(round.grid(), &round.legal_moves()).unwrap();
        assert_eq!(mv, Move::Column(2));
    }

    #[test]
    fn test_drop_centre_is_middle_column() {
        let ruleset = Ruleset::connect_four();
        let round = Round::new(&ruleset, Token::First);
        let mut bot = BlockOrWin::new(&ruleset, Token::First, GameRng::new(3));
        let mv = bot.choose_move(round.grid(), &round.legal_moves()).unwrap();
        assert_eq!(mv, Move::Column(3));
    }
}
