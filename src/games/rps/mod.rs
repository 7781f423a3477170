//! Rock, paper, scissors, Spock, lizard.
//!
//! A human (`Token::First`) plays a computer opponent (`Token::Second`).
//! Rounds are scored into a `MatchState`; the first to the target takes the
//! game, and `RpsMatch` keeps a running count of games won across rematches.

pub mod history;
pub mod opponents;
pub mod throw;

pub use history::{History, RoundRecord};
pub use opponents::{ChoiceWeights, Opponent, ThrowStrategy};
pub use throw::{Duel, Throw};

use std::num::NonZeroU32;

use crate::core::{Token, TokenMap};
use crate::rules::matches::const_target;
use crate::rules::{MatchState, MatchStatus};

/// Default number of round wins per game.
pub const DEFAULT_TARGET: NonZeroU32 = const_target(10);

/// One series of RPS games against a single opponent.
#[derive(Clone, Debug)]
pub struct RpsMatch {
    score: MatchState,
    history: History,
    game: u32,
    round: u32,
    games_won: TokenMap<u32>,
}

impl RpsMatch {
    #[must_use]
    pub fn new(target: NonZeroU32) -> Self {
        Self {
            score: MatchState::new(target),
            history: History::new(),
            game: 1,
            round: 0,
            games_won: TokenMap::with_default(),
        }
    }

    /// Resolve one round and log it.
    ///
    /// Rounds offered after the game is decided are ignored and return
    /// `None`; call `next_game` first.
    pub fn play_round(&mut self, human: Throw, computer: Throw) -> Option<RoundRecord> {
        if self.score.is_over() {
            return None;
        }
        self.round += 1;
        let winner = match human.duel(computer) {
            Duel::Win => Some(Token::First),
            Duel::Lose => Some(Token::Second),
            Duel::Tie => None,
        };
        let record = RoundRecord {
            human,
            computer,
            winner,
            game: self.game,
            round: self.round,
        };
        self.history.push(record);
        if let MatchStatus::Won(token) = self.score.record(winner) {
            self.games_won[token] += 1;
        }
        Some(record)
    }

    /// Start a rematch. Scores reset; history and games won carry over.
    pub fn next_game(&mut self) {
        self.score.reset();
        self.game += 1;
        self.round = 0;
    }

    #[must_use]
    pub fn score(&self) -> &MatchState {
        &self.score
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn game(&self) -> u32 {
        self.game
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn games_won(&self, token: Token) -> u32 {
        self.games_won[token]
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.score.is_over()
    }
}

impl Default for RpsMatch {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}
