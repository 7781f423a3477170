//! The round state machine.
//!
//! A `Round` is one grid from empty to won or drawn. It alternates the
//! active token, validates each move against the placement rule, and
//! re-runs win detection after every placement.
//!
//! ## States
//!
//! ```text
//! InProgress --winning move--> Won(token)
//! InProgress --filling move--> Drawn
//! ```
//!
//! Both end states are terminal: every later `submit_move` fails with
//! `IllegalMove::RoundOver` and leaves the round untouched.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::win;
use crate::core::Token;
use crate::error::{IllegalMove, MoveError};
use crate::grid::{Coord, Grid, GridShape, Line, LineCatalog, Move};

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Won(Token),
    Drawn,
}

impl RoundStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Token> {
        match self {
            RoundStatus::Won(token) => Some(*token),
            _ => None,
        }
    }

    /// Check if a token won.
    #[must_use]
    pub fn is_winner(&self, token: Token) -> bool {
        self.winner() == Some(token)
    }
}

/// A grid shape with its line catalog, shared by every round of a match.
#[derive(Clone, Debug)]
pub struct Ruleset {
    shape: GridShape,
    catalog: Arc<LineCatalog>,
}

impl Ruleset {
    #[must_use]
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            catalog: Arc::new(LineCatalog::new(&shape)),
        }
    }

    #[must_use]
    pub fn connect_four() -> Self {
        Self::new(GridShape::connect_four())
    }

    #[must_use]
    pub fn tic_tac_toe() -> Self {
        Self::new(GridShape::tic_tac_toe())
    }

    #[must_use]
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    #[must_use]
    pub fn catalog(&self) -> &LineCatalog {
        &self.catalog
    }
}

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Who moved.
    pub token: Token,
    /// The move as submitted.
    pub mv: Move,
    /// The cell it marked.
    pub coord: Coord,
    /// Status after the move.
    pub status: RoundStatus,
    /// One-based position of this move in the round.
    pub move_number: usize,
}

/// One round on one grid.
///
/// ## Example
///
/// ```
/// use parlor::core::Token;
/// use parlor::grid::Move;
/// use parlor::rules::{Round, RoundStatus, Ruleset};
///
/// let ruleset = Ruleset::connect_four();
/// let mut round = Round::new(&ruleset, Token::First);
///
/// for col in [0, 6, 1, 6, 2, 6] {
///     round.submit_move(Move::Column(col)).unwrap();
/// }
/// let report = round.submit_move(Move::Column(3)).unwrap();
/// assert_eq!(report.status, RoundStatus::Won(Token::First));
/// ```
#[derive(Clone, Debug)]
pub struct Round {
    ruleset: Ruleset,
    grid: Grid,
    starting: Token,
    active: Token,
    move_count: usize,
    status: RoundStatus,
}

impl Round {
    /// Start a round on an empty grid.
    #[must_use]
    pub fn new(ruleset: &Ruleset, starting: Token) -> Self {
        Self {
            ruleset: ruleset.clone(),
            grid: Grid::new(*ruleset.shape()),
            starting,
            active: starting,
            move_count: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// Clear the grid for another round with the same ruleset.
    pub fn reset(&mut self, starting: Token) {
        self.grid.reset();
        self.starting = starting;
        self.active = starting;
        self.move_count = 0;
        self.status = RoundStatus::InProgress;
    }

    #[must_use]
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Token whose turn it is. After the round ends this is the token that
    /// made the final move.
    #[must_use]
    pub fn active(&self) -> Token {
        self.active
    }

    #[must_use]
    pub fn starting(&self) -> Token {
        self.starting
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Legal moves for the active token; empty once the round is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.grid.legal_moves()
    }

    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.status.is_terminal() && self.grid.resolve(mv).is_ok()
    }

    /// The line that ended the round, if it was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<&Line> {
        match self.status {
            RoundStatus::Won(_) => {
                win::winning_line(&self.grid, self.ruleset.catalog()).map(|(_, line)| line)
            }
            _ => None,
        }
    }

    /// Apply the active token's move.
    ///
    /// On error the round is unchanged.
    pub fn submit_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        if self.status.is_terminal() {
            return Err(IllegalMove::RoundOver.into());
        }

        let coord = self.grid.resolve(mv)?;
        let token = self.active;
        self.grid.place(coord, token)?;
        self.move_count += 1;

        self.status = match win::winner(&self.grid, self.ruleset.catalog()) {
            Some(winner) => RoundStatus::Won(winner),
            None if self.grid.is_full() => RoundStatus::Drawn,
            None => RoundStatus::InProgress,
        };
        if !self.status.is_terminal() {
            self.active = token.other();
        }

        Ok(MoveReport {
            token,
            mv,
            coord,
            status: self.status,
            move_number: self.move_count,
        })
    }
}
