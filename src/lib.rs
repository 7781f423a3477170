//! # parlor
//!
//! Two-player terminal games built on one grid engine.
//!
//! ## Design Principles
//!
//! 1. **One Engine, Many Shapes**: Connect Four and Tic-Tac-Toe are the same
//!    occupancy grid and line-based win detector with different `GridShape`s.
//!
//! 2. **Strategies, Not Player Kinds**: humans and computer opponents are
//!    both `MoveStrategy` implementations seated at a `Token`.
//!
//! 3. **Quiet Core**: `grid` and `rules` never log, print or read input.
//!    Rejections are `Result`s; wins and draws are statuses.
//!
//! ## Architecture
//!
//! - **Line Catalog**: every winning line is precomputed per shape and
//!   shared by `Arc` across rounds.
//!
//! - **Deterministic Randomness**: all randomness flows from a seeded
//!   `GameRng`, so a seed replays a whole session.
//!
//! ## Modules
//!
//! - `core`: tokens, per-token storage, RNG
//! - `grid`: coordinates, shapes, occupancy grid, line catalog
//! - `rules`: win detection, round state machine, match scoring
//! - `strategy`: move strategies (human prompt, random, heuristic, scripted)
//! - `session`: the loop binding strategies to rounds and matches
//! - `render`: text rendering of grids
//! - `games`: Connect Four and Tic-Tac-Toe presets, RPS, Twenty-One, Guess Who
//! - `config`: TOML configuration for the `play` binary
//! - `error`: error types

pub mod config;
pub mod core;
pub mod error;
pub mod games;
pub mod grid;
pub mod render;
pub mod rules;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameRng, Token, TokenMap};

pub use crate::grid::{Cell, Coord, Grid, GridShape, Line, LineCatalog, Move, Placement};

pub use crate::rules::{MatchState, MatchStatus, MoveReport, Round, RoundStatus, Ruleset};

pub use crate::strategy::{BlockOrWin, HumanPrompt, MoveStrategy, RandomLegal, Scripted};

pub use crate::session::{play_match, play_round, MatchSettings, NullObserver, Observer, Seating};

pub use crate::config::PlayConfig;

pub use crate::error::{
    ConfigError, GridError, GuessWhoError, IllegalMove, MoveError, SessionError, ShapeError,
    StrategyError, TwentyOneError,
};
