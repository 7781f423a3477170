//! Match scoring.
//!
//! A match is a run of rounds until one token's score reaches the target.
//! The same state backs grid matches, rock-paper-scissors and twenty-one.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::round::RoundStatus;
use crate::core::{Token, TokenMap};

/// Round wins a grid or twenty-one match is played to by default.
pub const DEFAULT_MATCH_TARGET: NonZeroU32 = const_target(5);

/// A target fixed at compile time; zero fails const evaluation.
pub(crate) const fn const_target(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(target) => target,
        None => panic!("target score must be at least 1"),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Won(Token),
}

/// Rounds played and per-token score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    target: NonZeroU32,
    scores: TokenMap<u32>,
    rounds_played: u32,
    draws: u32,
}

impl MatchState {
    /// Create a match played to `target` round wins.
    #[must_use]
    pub fn new(target: NonZeroU32) -> Self {
        Self {
            target,
            scores: TokenMap::with_default(),
            rounds_played: 0,
            draws: 0,
        }
    }

    /// Score a finished round. `None` is a draw.
    ///
    /// Ignored once the match is over.
    pub fn record(&mut self, winner: Option<Token>) -> MatchStatus {
        if self.is_over() {
            return self.status();
        }
        self.rounds_played += 1;
        match winner {
            Some(token) => self.scores[token] += 1,
            None => self.draws += 1,
        }
        self.status()
    }

    /// Score a grid round by its final status. In-progress rounds are ignored.
    pub fn record_round(&mut self, status: RoundStatus) -> MatchStatus {
        match status {
            RoundStatus::InProgress => self.status(),
            RoundStatus::Won(token) => self.record(Some(token)),
            RoundStatus::Drawn => self.record(None),
        }
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.scores
            .iter()
            .find(|(_, score)| **score >= self.target.get())
            .map_or(MatchStatus::InProgress, |(token, _)| MatchStatus::Won(token))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status(), MatchStatus::Won(_))
    }

    #[must_use]
    pub fn winner(&self) -> Option<Token> {
        match self.status() {
            MatchStatus::Won(token) => Some(token),
            MatchStatus::InProgress => None,
        }
    }

    /// Token with the strictly higher score, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Token> {
        let (first, second) = (self.scores[Token::First], self.scores[Token::Second]);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Token::First),
            std::cmp::Ordering::Less => Some(Token::Second),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn score(&self, token: Token) -> u32 {
        self.scores[token]
    }

    #[must_use]
    pub fn scores(&self) -> &TokenMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target.get()
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Zero the scores for a rematch at the same target.
    pub fn reset(&mut self) {
        *self = Self::new(self.target);
    }
}
