//! Computer opponents.
//!
//! | Opponent | Behaviour |
//! |----------|-----------|
//! | Sonny    | uniform random |
//! | R2D2     | always rock |
//! | Hal      | fixed weights, mostly scissors, never paper |
//! | Number 5 | copies the human's previous throw |
//! | Chappie  | drifts toward the human's previous throw |
//! | EVE      | drifts away from her own throws that keep failing |
//!
//! The weighted opponents keep their weights summing to 100.

use std::str::FromStr;

use super::history::History;
use super::throw::Throw;
use crate::core::{GameRng, Token};
use crate::error::ParseOpponentError;

/// Picks a throw each round.
pub trait ThrowStrategy {
    fn name(&self) -> &str;

    /// `history` holds every round played so far, across games.
    fn choose_throw(&mut self, history: &History, rng: &mut GameRng) -> Throw;
}

fn random_throw(rng: &mut GameRng) -> Throw {
    Throw::ALL[rng.gen_range_usize(0..Throw::ALL.len())]
}

/// Per-throw selection weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChoiceWeights([f64; 5]);

impl ChoiceWeights {
    #[must_use]
    pub const fn new(weights: [f64; 5]) -> Self {
        Self(weights)
    }

    #[must_use]
    pub const fn uniform() -> Self {
        Self([20.0; 5])
    }

    #[must_use]
    pub fn weight(&self, throw: Throw) -> f64 {
        self.0[throw.index()]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Move `shift` weight onto `focus`, taking it from the other throws in
    /// proportion to their current weight. A negative shift moves weight
    /// away from `focus`.
    pub fn shift_toward(&mut self, focus: Throw, shift: f64) {
        let others: f64 = Throw::ALL
            .iter()
            .filter(|t| **t != focus)
            .map(|t| self.weight(*t))
            .sum();
        if others <= 0.0 {
            return;
        }
        for throw in Throw::ALL {
            if throw == focus {
                self.0[throw.index()] += shift;
            } else {
                self.0[throw.index()] -= self.0[throw.index()] / others * shift;
            }
        }
    }

    pub fn pick(&self, rng: &mut GameRng) -> Throw {
        rng.choose_weighted(&self.0)
            .and_then(Throw::from_index)
            .unwrap_or_else(|| random_throw(rng))
    }
}

// =============================================================================
// Fixed opponents
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct Sonny;

impl ThrowStrategy for Sonny {
    fn name(&self) -> &str {
        "Sonny"
    }

    fn choose_throw(&mut self, _history: &History, rng: &mut GameRng) -> Throw {
        random_throw(rng)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct R2d2;

impl ThrowStrategy for R2d2 {
    fn name(&self) -> &str {
        "R2D2"
    }

    fn choose_throw(&mut self, _history: &History, _rng: &mut GameRng) -> Throw {
        Throw::Rock
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Hal {
    weights: ChoiceWeights,
}

impl Default for Hal {
    fn default() -> Self {
        Self {
            weights: ChoiceWeights::new([4.0, 0.0, 60.0, 18.0, 18.0]),
        }
    }
}

impl ThrowStrategy for Hal {
    fn name(&self) -> &str {
        "Hal"
    }

    fn choose_throw(&mut self, _history: &History, rng: &mut GameRng) -> Throw {
        self.weights.pick(rng)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Number5;

impl ThrowStrategy for Number5 {
    fn name(&self) -> &str {
        "Number 5"
    }

    fn choose_throw(&mut self, history: &History, rng: &mut GameRng) -> Throw {
        match history.last() {
            Some(record) => record.human,
            None => random_throw(rng),
        }
    }
}

// =============================================================================
// Adaptive opponents
// =============================================================================

/// Shifts 15% of the focus weight toward the human's last throw, unless that
/// would push it past 100.
#[derive(Clone, Debug)]
pub struct Chappie {
    weights: ChoiceWeights,
    seen: usize,
}

impl Default for Chappie {
    fn default() -> Self {
        Self {
            weights: ChoiceWeights::uniform(),
            seen: 0,
        }
    }
}

impl Chappie {
    #[must_use]
    pub fn weights(&self) -> &ChoiceWeights {
        &self.weights
    }
}

impl ThrowStrategy for Chappie {
    fn name(&self) -> &str {
        "Chappie"
    }

    fn choose_throw(&mut self, history: &History, rng: &mut GameRng) -> Throw {
        if history.is_empty() {
            return random_throw(rng);
        }
        for record in history.since(self.seen) {
            let focus = record.human;
            let shift = self.weights.weight(focus) * 0.15;
            if self.weights.weight(focus) + shift <= 100.0 {
                self.weights.shift_toward(focus, shift);
            }
        }
        self.seen = history.len();
        self.weights.pick(rng)
    }
}

/// Tallies the rounds each of her throws failed to win. When her last throw
/// lost or tied and accounts for more than 20% of her failures, 15% of its
/// weight moves to the other throws.
#[derive(Clone, Debug)]
pub struct Eve {
    weights: ChoiceWeights,
    failures: [u32; 5],
    seen: usize,
}

impl Default for Eve {
    fn default() -> Self {
        Self {
            weights: ChoiceWeights::uniform(),
            failures: [0; 5],
            seen: 0,
        }
    }
}

impl Eve {
    #[must_use]
    pub fn weights(&self) -> &ChoiceWeights {
        &self.weights
    }

    fn failure_percent(&self, throw: Throw) -> f64 {
        let total: u32 = self.failures.iter().sum();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.failures[throw.index()]) / f64::from(total) * 100.0
    }
}

impl ThrowStrategy for Eve {
    fn name(&self) -> &str {
        "EVE"
    }

    fn choose_throw(&mut self, history: &History, rng: &mut GameRng) -> Throw {
        if history.is_empty() {
            return random_throw(rng);
        }
        for record in history.since(self.seen) {
            let focus = record.computer;
            let failed = record.winner != Some(Token::Second);
            if failed {
                self.failures[focus.index()] += 1;
            }
            if failed && self.failure_percent(focus) > 20.0 {
                let shift = self.weights.weight(focus) * -0.15;
                self.weights.shift_toward(focus, shift);
            }
        }
        self.seen = history.len();
        self.weights.pick(rng)
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Named opponent choice, numbered 1-6 in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opponent {
    Eve,
    Number5,
    R2d2,
    Chappie,
    Sonny,
    Hal,
}

impl Opponent {
    pub const ALL: [Opponent; 6] = [
        Opponent::Eve,
        Opponent::Number5,
        Opponent::R2d2,
        Opponent::Chappie,
        Opponent::Sonny,
        Opponent::Hal,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Opponent::Eve => "EVE",
            Opponent::Number5 => "Number 5",
            Opponent::R2d2 => "R2D2",
            Opponent::Chappie => "Chappie",
            Opponent::Sonny => "Sonny",
            Opponent::Hal => "Hal",
        }
    }

    #[must_use]
    pub fn build(self) -> Box<dyn ThrowStrategy> {
        match self {
            Opponent::Eve => Box::<Eve>::default(),
            Opponent::Number5 => Box::new(Number5),
            Opponent::R2d2 => Box::new(R2d2),
            Opponent::Chappie => Box::<Chappie>::default(),
            Opponent::Sonny => Box::new(Sonny),
            Opponent::Hal => Box::<Hal>::default(),
        }
    }
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Opponent {
    type Err = ParseOpponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if let Ok(number) = key.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| ParseOpponentError(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|o| o.name().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| ParseOpponentError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::rps::history::RoundRecord;

    fn push(history: &mut History, human: Throw, computer: Throw) {
        let winner = if human.beats(computer) {
            Some(Token::First)
        } else if computer.beats(human) {
            Some(Token::Second)
        } else {
            None
        };
        let round = history.len() as u32 + 1;
        history.push(RoundRecord {
            human,
            computer,
            winner,
            game: 1,
            round,
        });
    }

    #[test]
    fn test_r2d2_always_rock() {
        let mut rng = GameRng::new(1);
        let history = History::new();
        let mut bot = R2d2;
        for _ in 0..10 {
            assert_eq!(bot.choose_throw(&history, &mut rng), Throw::Rock);
        }
    }

    #[test]
    fn test_hal_never_paper() {
        let mut rng = GameRng::new(2);
        let history = History::new();
        let mut bot = Hal::default();
        for _ in 0..500 {
            assert_ne!(bot.choose_throw(&history, &mut rng), Throw::Paper);
        }
    }

    #[test]
    fn test_number5_copies_human() {
        let mut rng = GameRng::new(3);
        let mut history = History::new();
        push(&mut history, Throw::Spock, Throw::Rock);
        let mut bot = Number5;
        assert_eq!(bot.choose_throw(&history, &mut rng), Throw::Spock);
    }

    #[test]
    fn test_shift_keeps_total() {
        let mut weights = ChoiceWeights::uniform();
        weights.shift_toward(Throw::Paper, 3.0);
        assert!((weights.total() - 100.0).abs() < 1e-9);
        assert!((weights.weight(Throw::Paper) - 23.0).abs() < 1e-9);
        assert!((weights.weight(Throw::Rock) - 19.25).abs() < 1e-9);

        weights.shift_toward(Throw::Paper, -weights.weight(Throw::Paper) * 0.15);
        assert!((weights.total() - 100.0).abs() < 1e-9);
        assert!(weights.weight(Throw::Paper) < 20.0);
    }

    #[test]
    fn test_chappie_drifts_toward_human() {
        let mut rng = GameRng::new(4);
        let mut history = History::new();
        let mut bot = Chappie::default();
        for _ in 0..10 {
            push(&mut history, Throw::Lizard, Throw::Rock);
            bot.choose_throw(&history, &mut rng);
        }
        let weights = bot.weights();
        assert!(weights.weight(Throw::Lizard) > 60.0);
        assert!(weights.weight(Throw::Lizard) <= 100.0);
        assert!((weights.total() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_chappie_processes_each_round_once() {
        let mut rng = GameRng::new(5);
        let mut history = History::new();
        push(&mut history, Throw::Rock, Throw::Rock);
        let mut bot = Chappie::default();
        bot.choose_throw(&history, &mut rng);
        let after_one = *bot.weights();
        bot.choose_throw(&history, &mut rng);
        assert_eq!(*bot.weights(), after_one);
    }

    #[test]
    fn test_eve_moves_away_from_losing_throw() {
        let mut rng = GameRng::new(6);
        let mut history = History::new();
        let mut bot = Eve::default();
        for _ in 0..5 {
            // Paper loses to scissors every time.
            push(&mut history, Throw::Scissors, Throw::Paper);
            bot.choose_throw(&history, &mut rng);
        }
        let weights = bot.weights();
        assert!(weights.weight(Throw::Paper) < 20.0);
        assert!(weights.weight(Throw::Rock) > 20.0);
        assert!((weights.total() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_eve_keeps_weights_after_win() {
        let mut rng = GameRng::new(7);
        let mut history = History::new();
        push(&mut history, Throw::Scissors, Throw::Rock);
        let mut bot = Eve::default();
        bot.choose_throw(&history, &mut rng);
        assert_eq!(*bot.weights(), ChoiceWeights::uniform());
    }

    #[test]
    fn test_opponent_parse() {
        assert_eq!("1".parse(), Ok(Opponent::Eve));
        assert_eq!("Number 5".parse(), Ok(Opponent::Number5));
        assert_eq!("number5".parse(), Ok(Opponent::Number5));
        assert_eq!("r2d2".parse(), Ok(Opponent::R2d2));
        assert_eq!("6".parse(), Ok(Opponent::Hal));
        assert!("7".parse::<Opponent>().is_err());
        assert!("0".parse::<Opponent>().is_err());
        assert!("Wall-E".parse::<Opponent>().is_err());
    }

    #[test]
    fn test_build_names_match() {
        for opponent in Opponent::ALL {
            assert_eq!(opponent.build().name(), opponent.name());
        }
    }
}
