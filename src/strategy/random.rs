//! Uniform random play.

use super::MoveStrategy;
use crate::core::GameRng;
use crate::error::StrategyError;
use crate::grid::{Grid, Move};

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomLegal {
    name: String,
    rng: GameRng,
}

impl RandomLegal {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            name: "Computer".to_string(),
            rng,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl MoveStrategy for RandomLegal {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _grid: &Grid, legal: &[Move]) -> Result<Move, StrategyError> {
        self.rng
            .choose(legal)
            .copied()
            .ok_or(StrategyError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridShape;

    #[test]
    fn test_random_picks_legal() {
        let grid = Grid::new(GridShape::connect_four());
        let legal = grid.legal_moves();
        let mut strategy = RandomLegal::new(GameRng::new(42));
        for _ in 0..50 {
            let mv = strategy.choose_move(&grid, &legal).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let grid = Grid::new(GridShape::tic_tac_toe());
        let legal = grid.legal_moves();
        let mut a = RandomLegal::new(GameRng::new(5));
        let mut b = RandomLegal::new(GameRng::new(5));
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&grid, &legal).unwrap(),
                b.choose_move(&grid, &legal).unwrap()
            );
        }
    }

    #[test]
    fn test_random_no_moves() {
        let grid = Grid::new(GridShape::tic_tac_toe());
        let mut strategy = RandomLegal::new(GameRng::new(1)).with_name("Bot");
        assert_eq!(strategy.name(), "Bot");
        assert!(matches!(
            strategy.choose_move(&grid, &[]),
            Err(StrategyError::NoLegalMoves)
        ));
    }
}
