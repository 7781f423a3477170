//! One hand of Twenty-One against the dealer.
//!
//! ## Flow
//!
//! 1. Two cards each, player first.
//! 2. The player hits until they stay or bust. A bust settles the round.
//! 3. The dealer hits while below the stand total, then the higher total
//!    wins. Equal totals push.

use serde::{Deserialize, Serialize};

use super::cards::{Card, Deck};
use super::hand::Hand;
use crate::core::{GameRng, Token};
use crate::error::{StrategyError, TwentyOneError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Hit,
    Stay,
}

/// How a round was settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    /// Round winner for match scoring: the player is `First`, the dealer
    /// `Second`.
    #[must_use]
    pub const fn winner(self) -> Option<Token> {
        match self {
            Outcome::DealerBust | Outcome::PlayerWins => Some(Token::First),
            Outcome::PlayerBust | Outcome::DealerWins => Some(Token::Second),
            Outcome::Push => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    Settled(Outcome),
}

/// Decides hit or stay for the player.
pub trait TwentyOneStrategy {
    fn decide(&mut self, hand: &Hand, dealer_shows: Card) -> Result<Decision, StrategyError>;
}

/// Hits below a fixed total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandOn(pub u32);

impl TwentyOneStrategy for StandOn {
    fn decide(&mut self, hand: &Hand, _dealer_shows: Card) -> Result<Decision, StrategyError> {
        Ok(if hand.total() < self.0 {
            Decision::Hit
        } else {
            Decision::Stay
        })
    }
}

#[derive(Clone, Debug)]
pub struct TwentyOneRound {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    stands_on: u32,
    phase: Phase,
}

impl TwentyOneRound {
    /// Shuffle a fresh deck and deal.
    pub fn new(rng: &mut GameRng, stands_on: u32) -> Result<Self, TwentyOneError> {
        Self::with_deck(Deck::shuffled(rng), stands_on)
    }

    /// Deal from a prepared deck.
    pub fn with_deck(mut deck: Deck, stands_on: u32) -> Result<Self, TwentyOneError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.add(deck.deal().ok_or(TwentyOneError::DeckExhausted)?);
            dealer.add(deck.deal().ok_or(TwentyOneError::DeckExhausted)?);
        }
        Ok(Self {
            deck,
            player,
            dealer,
            stands_on,
            phase: Phase::PlayerTurn,
        })
    }

    #[must_use]
    pub fn player(&self) -> &Hand {
        &self.player
    }

    #[must_use]
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// The dealer's face-up card.
    #[must_use]
    pub fn dealer_shows(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Apply the player's decision.
    pub fn player_decides(&mut self, decision: Decision) -> Result<Phase, TwentyOneError> {
        match self.phase {
            Phase::Settled(_) => return Err(TwentyOneError::RoundOver),
            Phase::DealerTurn => return Err(TwentyOneError::NotPlayersTurn),
            Phase::PlayerTurn => {}
        }
        self.phase = match decision {
            Decision::Hit => {
                let card = self.deck.deal().ok_or(TwentyOneError::DeckExhausted)?;
                self.player.add(card);
                if self.player.is_busted() {
                    Phase::Settled(Outcome::PlayerBust)
                } else {
                    Phase::PlayerTurn
                }
            }
            Decision::Stay => Phase::DealerTurn,
        };
        Ok(self.phase)
    }

    /// One dealer action: hit below the stand total, otherwise settle.
    ///
    /// Returns the card drawn, if any.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, TwentyOneError> {
        match self.phase {
            Phase::Settled(_) => return Err(TwentyOneError::RoundOver),
            Phase::PlayerTurn => return Err(TwentyOneError::NotDealersTurn),
            Phase::DealerTurn => {}
        }
        if self.dealer.total() < self.stands_on {
            let card = self.deck.deal().ok_or(TwentyOneError::DeckExhausted)?;
            self.dealer.add(card);
            if self.dealer.is_busted() {
                self.phase = Phase::Settled(Outcome::DealerBust);
            }
            return Ok(Some(card));
        }
        self.phase = Phase::Settled(self.compare());
        Ok(None)
    }

    /// Run the dealer to the end of the round.
    pub fn play_dealer(&mut self) -> Result<Outcome, TwentyOneError> {
        loop {
            if let Phase::Settled(outcome) = self.phase {
                return Ok(outcome);
            }
            self.dealer_step()?;
        }
    }

    /// Play the whole round with `strategy` deciding for the player.
    pub fn play_out(
        &mut self,
        strategy: &mut dyn TwentyOneStrategy,
    ) -> Result<Outcome, TwentyOneError> {
        while self.phase == Phase::PlayerTurn {
            let shows = self.dealer_shows().ok_or(TwentyOneError::DeckExhausted)?;
            let decision = strategy.decide(&self.player, shows)?;
            self.player_decides(decision)?;
        }
        self.play_dealer()
    }

    fn compare(&self) -> Outcome {
        match self.player.total().cmp(&self.dealer.total()) {
            std::cmp::Ordering::Greater => Outcome::PlayerWins,
            std::cmp::Ordering::Less => Outcome::DealerWins,
            std::cmp::Ordering::Equal => Outcome::Push,
        }
    }
}
