//! Append-only throw history.
//!
//! The human sits at `Token::First`, the computer at `Token::Second`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::throw::Throw;
use crate::core::Token;

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub human: Throw,
    pub computer: Throw,
    /// `None` on a tie.
    pub winner: Option<Token>,
    /// Game (match) number, from 1.
    pub game: u32,
    /// Round number within the game, from 1.
    pub round: u32,
}

impl RoundRecord {
    #[must_use]
    pub fn throw_of(&self, token: Token) -> Throw {
        match token {
            Token::First => self.human,
            Token::Second => self.computer,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vector<RoundRecord>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RoundRecord) {
        self.records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RoundRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }

    pub fn human_throws(&self) -> impl Iterator<Item = Throw> + '_ {
        self.records.iter().map(|r| r.human)
    }

    pub fn computer_throws(&self) -> impl Iterator<Item = Throw> + '_ {
        self.records.iter().map(|r| r.computer)
    }

    /// Records added after the first `seen`.
    pub fn since(&self, seen: usize) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter().skip(seen)
    }
}
