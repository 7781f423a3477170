//! Twenty-One: the player against a dealer who hits below a fixed total.
//!
//! Rounds are scored into a `MatchState` with the player at `Token::First`
//! and the dealer at `Token::Second`. Pushes score nothing.

pub mod cards;
pub mod hand;
pub mod round;

pub use cards::{Card, Deck, Rank, Suit};
pub use hand::Hand;
pub use round::{Decision, Outcome, Phase, StandOn, TwentyOneRound, TwentyOneStrategy};

use std::num::NonZeroU32;

use crate::core::GameRng;
use crate::error::TwentyOneError;
use crate::rules::MatchState;

pub const DEFAULT_STANDS_ON: u32 = 17;

/// A run of rounds to a target score, each dealt from a fresh deck.
#[derive(Clone, Debug)]
pub struct TwentyOneMatch {
    score: MatchState,
    stands_on: u32,
}

impl TwentyOneMatch {
    #[must_use]
    pub fn new(target: NonZeroU32, stands_on: u32) -> Self {
        Self {
            score: MatchState::new(target),
            stands_on,
        }
    }

    /// Deal, let `strategy` play the hand, run the dealer, score the result.
    ///
    /// The finished round is returned for display.
    pub fn play_round(
        &mut self,
        rng: &mut GameRng,
        strategy: &mut dyn TwentyOneStrategy,
    ) -> Result<TwentyOneRound, TwentyOneError> {
        let round = TwentyOneRound::new(rng, self.stands_on)?;
        self.finish(round, strategy)
    }

    /// Like `play_round`, dealing from a prepared deck.
    pub fn play_round_with_deck(
        &mut self,
        deck: Deck,
        strategy: &mut dyn TwentyOneStrategy,
    ) -> Result<TwentyOneRound, TwentyOneError> {
        let round = TwentyOneRound::with_deck(deck, self.stands_on)?;
        self.finish(round, strategy)
    }

    fn finish(
        &mut self,
        mut round: TwentyOneRound,
        strategy: &mut dyn TwentyOneStrategy,
    ) -> Result<TwentyOneRound, TwentyOneError> {
        if self.score.is_over() {
            return Err(TwentyOneError::RoundOver);
        }
        let outcome = round.play_out(strategy)?;
        self.score.record(outcome.winner());
        Ok(round)
    }

    #[must_use]
    pub fn score(&self) -> &MatchState {
        &self.score
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.score.is_over()
    }

    #[must_use]
    pub fn stands_on(&self) -> u32 {
        self.stands_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    #[test]
    fn test_match_scores_rounds() {
        let mut game = TwentyOneMatch::new(NonZeroU32::MIN, DEFAULT_STANDS_ON);
        let deck = Deck::stacked(
            [Rank::King, Rank::Ten, Rank::Queen, Rank::Seven]
                .map(|rank| Card::new(rank, Suit::Clubs)),
        );
        let round = game.play_round_with_deck(deck, &mut StandOn(17)).unwrap();
        assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
        assert!(game.is_over());
        assert_eq!(game.score().winner(), Some(Token::First));

        let again = game.play_round(&mut GameRng::new(1), &mut StandOn(17));
        assert!(matches!(again, Err(TwentyOneError::RoundOver)));
    }

    #[test]
    fn test_seeded_matches_agree() {
        let three = NonZeroU32::new(3).unwrap();
        let mut a = TwentyOneMatch::new(three, DEFAULT_STANDS_ON);
        let mut b = TwentyOneMatch::new(three, DEFAULT_STANDS_ON);
        let mut rng_a = GameRng::new(21);
        let mut rng_b = GameRng::new(21);
        while !a.is_over() {
            let ra = a.play_round(&mut rng_a, &mut StandOn(16)).unwrap();
            let rb = b.play_round(&mut rng_b, &mut StandOn(16)).unwrap();
            assert_eq!(ra.outcome(), rb.outcome());
        }
        assert_eq!(a.score(), b.score());
    }
}
