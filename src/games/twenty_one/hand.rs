//! Hands and totals.

use smallvec::SmallVec;

use super::cards::Card;

pub const BUST_LIMIT: u32 = 21;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sum of card values, with aces dropped from 11 to 1 one at a time
    /// while the total is over 21.
    #[must_use]
    pub fn total(&self) -> u32 {
        let mut total: u32 = self.cards.iter().map(|c| c.rank.value()).sum();
        let mut soft_aces = self.cards.iter().filter(|c| c.is_ace()).count();
        while total > BUST_LIMIT && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        total
    }

    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > BUST_LIMIT
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        write!(f, "{} ({})", cards.join(" "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::twenty_one::cards::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for rank in ranks {
            hand.add(Card::new(*rank, Suit::Spades));
        }
        hand
    }

    #[test]
    fn test_plain_total() {
        assert_eq!(hand(&[Rank::King, Rank::Seven]).total(), 17);
        assert_eq!(hand(&[]).total(), 0);
    }

    #[test]
    fn test_aces_demote_one_at_a_time() {
        assert_eq!(hand(&[Rank::Ace, Rank::King]).total(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).total(), 12);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).total(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::King, Rank::Five]).total(), 16);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).total(), 14);
    }

    #[test]
    fn test_bust() {
        assert!(hand(&[Rank::King, Rank::Queen, Rank::Two]).is_busted());
        assert!(!hand(&[Rank::King, Rank::Queen, Rank::Ace]).is_busted());
    }

    #[test]
    fn test_display() {
        let h = hand(&[Rank::Ace, Rank::Nine]);
        assert_eq!(h.to_string(), "A♠ 9♠ (20)");
    }
}
