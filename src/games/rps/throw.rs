//! Throws and who beats whom.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThrowError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Throw {
    Rock,
    Paper,
    Scissors,
    Spock,
    Lizard,
}

/// `BEATS[a][b]`: throw `a` beats throw `b`.
const BEATS: [[bool; 5]; 5] = [
    // rock: scissors, lizard
    [false, false, true, false, true],
    // paper: rock, Spock
    [true, false, false, true, false],
    // scissors: paper, lizard
    [false, true, false, false, true],
    // Spock: rock, scissors
    [true, false, true, false, false],
    // lizard: paper, Spock
    [false, true, false, true, false],
];

/// Result of one throw against another, from the first thrower's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Duel {
    Win,
    Lose,
    Tie,
}

impl Throw {
    pub const ALL: [Throw; 5] = [
        Throw::Rock,
        Throw::Paper,
        Throw::Scissors,
        Throw::Spock,
        Throw::Lizard,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn beats(self, other: Throw) -> bool {
        BEATS[self as usize][other as usize]
    }

    #[must_use]
    pub const fn duel(self, other: Throw) -> Duel {
        if self.beats(other) {
            Duel::Win
        } else if other.beats(self) {
            Duel::Lose
        } else {
            Duel::Tie
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Throw::Rock => "rock",
            Throw::Paper => "paper",
            Throw::Scissors => "scissors",
            Throw::Spock => "Spock",
            Throw::Lizard => "lizard",
        }
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Throw {
    type Err = ParseThrowError;

    /// Names, single letters and 1-5. Lower-case `s` is scissors, upper-case
    /// `S` is Spock.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rock" | "r" | "R" | "1" => Ok(Throw::Rock),
            "paper" | "p" | "P" | "2" => Ok(Throw::Paper),
            "scissors" | "s" | "3" => Ok(Throw::Scissors),
            "Spock" | "spock" | "S" | "4" => Ok(Throw::Spock),
            "lizard" | "l" | "L" | "5" => Ok(Throw::Lizard),
            other => Err(ParseThrowError(other.to_string())),
        }
    }
}
