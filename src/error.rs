//! Error types for every layer of the crate.
//!
//! Wins and draws are round statuses, never errors. Everything here is a
//! rejected request: a bad shape, an out-of-bounds coordinate, an illegal
//! move, a strategy that could not answer, or a configuration file that
//! failed to load.

use std::path::PathBuf;

use crate::core::Token;
use crate::grid::{Coord, Move};

/// Errors from constructing a grid shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    Empty { rows: usize, cols: usize },

    #[error("win length {win_length} does not fit a {rows}x{cols} grid")]
    WinLength {
        rows: usize,
        cols: usize,
        win_length: usize,
    },

    #[error("a {rows}x{cols} grid needs {} cells (got {found})", rows * cols)]
    CellCount {
        rows: usize,
        cols: usize,
        found: usize,
    },
}

/// Errors from reading or writing grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("{0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("column {0} is outside the grid")]
    ColumnOutOfBounds(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),
}

/// A well-formed move that the current round refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),

    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("{0} is the wrong kind of move for this grid")]
    WrongKind(Move),

    #[error("the round is already over")]
    RoundOver,
}

/// Errors from `Round::submit_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{0} is outside the grid")]
    OutOfBounds(Move),

    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
}

impl MoveError {
    /// Whether the session should ask the strategy for another move.
    ///
    /// Only a move against a finished round is reported to the caller; an
    /// out-of-bounds move is as retryable as an occupied cell.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !self.is_round_over()
    }

    /// Whether the round had already ended when the move arrived.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        matches!(self, MoveError::Illegal(IllegalMove::RoundOver))
    }
}

impl From<GridError> for MoveError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds(coord) => MoveError::OutOfBounds(Move::At(coord)),
            GridError::ColumnOutOfBounds(col) => MoveError::OutOfBounds(Move::Column(col)),
            GridError::CellOccupied(coord) => IllegalMove::CellOccupied(coord).into(),
        }
    }
}

/// Errors a strategy can report instead of a move.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("input stream closed")]
    InputClosed,

    #[error("no legal moves to choose from")]
    NoLegalMoves,

    #[error("scripted moves exhausted")]
    Exhausted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end a session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("strategy for {token} failed: {source}")]
    Strategy {
        token: Token,
        source: StrategyError,
    },

    #[error("strategy for {token} made {attempts} illegal moves in a row")]
    StuckStrategy { token: Token, attempts: u32 },

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from a Twenty-One round.
#[derive(Debug, thiserror::Error)]
pub enum TwentyOneError {
    #[error("the deck ran out of cards")]
    DeckExhausted,

    #[error("the round is already settled")]
    RoundOver,

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("it is not the dealer's turn")]
    NotDealersTurn,

    #[error("player strategy failed: {0}")]
    Strategy(#[from] StrategyError),
}

/// Errors from a Guess Who roster or game.
#[derive(Debug, thiserror::Error)]
pub enum GuessWhoError {
    #[error("failed to read roster {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse roster: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("a roster needs at least two people (got {0})")]
    TooFewPeople(usize),

    #[error("{0:?} is on the roster more than once")]
    DuplicateName(String),

    #[error("{name} has traits {found:?}, expected {expected:?}")]
    MismatchedTraits {
        name: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{0:?} is not on the roster")]
    UnknownPerson(String),

    #[error("nobody left matches {0}")]
    ImpossibleGuess(String),

    #[error("the game is already won")]
    GameOver,

    #[error("strategy for {token} failed: {source}")]
    Strategy {
        token: Token,
        source: StrategyError,
    },
}

/// A throw name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown throw: {0:?}")]
pub struct ParseThrowError(pub String);

/// An opponent name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown opponent: {0:?}")]
pub struct ParseOpponentError(pub String);
