//! Fixed move lists for tests and replays.

use std::collections::VecDeque;

use super::MoveStrategy;
use crate::error::StrategyError;
use crate::grid::{Grid, Move};

/// Plays its moves in order, whether or not they are legal.
#[derive(Clone, Debug)]
pub struct Scripted {
    name: String,
    moves: VecDeque<Move>,
}

impl Scripted {
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: "Scripted".to_string(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Column moves from a list of zero-based columns.
    #[must_use]
    pub fn columns(cols: impl IntoIterator<Item = usize>) -> Self {
        Self::new(cols.into_iter().map(Move::Column))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveStrategy for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _grid: &Grid, _legal: &[Move]) -> Result<Move, StrategyError> {
        self.moves.pop_front().ok_or(StrategyError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridShape;

    #[test]
    fn test_plays_in_order_then_exhausts() {
        let grid = Grid::new(GridShape::connect_four());
        let mut script = Scripted::columns([3, 1]);
        assert_eq!(script.choose_move(&grid, &[]).unwrap(), Move::Column(3));
        assert_eq!(script.remaining(), 1);
        assert_eq!(script.choose_move(&grid, &[]).unwrap(), Move::Column(1));
        assert!(matches!(
            script.choose_move(&grid, &[]),
            Err(StrategyError::Exhausted)
        ));
    }
}
