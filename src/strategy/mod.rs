//! Move strategies.
//!
//! A strategy picks one move per turn for the token it is seated at. Humans
//! and computer players are both strategies; the round never knows which
//! one it is talking to.
//!
//! ## Implementations
//!
//! - `HumanPrompt`: reads a numbered choice from a text stream
//! - `RandomLegal`: uniform over the legal moves
//! - `BlockOrWin`: win if possible, else block, else centre, else random
//! - `Scripted`: replays a fixed list of moves

pub mod heuristic;
pub mod prompt;
pub mod random;
pub mod scripted;

pub use heuristic::BlockOrWin;
pub use prompt::{ask, HumanPrompt, LineSource};
pub use random::RandomLegal;
pub use scripted::Scripted;

use crate::error::StrategyError;
use crate::grid::{Grid, Move};

/// Supplies the active token's move.
///
/// `legal` is never empty while a round is in progress. A strategy that
/// answers with a move outside `legal` gets it rejected by the round and is
/// asked again.
pub trait MoveStrategy {
    /// Display name.
    fn name(&self) -> &str;

    /// Pick a move for the current grid.
    fn choose_move(&mut self, grid: &Grid, legal: &[Move]) -> Result<Move, StrategyError>;
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&mut self, grid: &Grid, legal: &[Move]) -> Result<Move, StrategyError> {
        (**self).choose_move(grid, legal)
    }
}
