//! Player tokens and per-token storage.
//!
//! ## Token
//!
//! Every game in this crate has exactly two competitors. A `Token` names
//! one of them; it is what marks a grid cell and what a score is kept for.
//!
//! ## TokenMap
//!
//! Two-slot storage indexed by `Token`, used for scores, markers and
//! strategy seating.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competitors.
///
/// `First` conventionally moves first and is drawn as `X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    /// The first competitor.
    First,
    /// The second competitor.
    Second,
}

impl Token {
    /// Both tokens, in seating order.
    pub const BOTH: [Token; 2] = [Token::First, Token::Second];

    /// The opposing token.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Token::First => Token::Second,
            Token::Second => Token::First,
        }
    }

    /// Slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Token::First => 0,
            Token::Second => 1,
        }
    }

    /// Default board marker.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Token::First => 'X',
            Token::Second => 'O',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-token data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use parlor::core::{Token, TokenMap};
///
/// let mut score: TokenMap<u32> = TokenMap::with_default();
/// score[Token::Second] += 1;
///
/// assert_eq!(score[Token::First], 0);
/// assert_eq!(score[Token::Second], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMap<T> {
    data: [T; 2],
}

impl<T> TokenMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Token) -> T) -> Self {
        Self {
            data: [factory(Token::First), factory(Token::Second)],
        }
    }

    /// Create a map from one value per token.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a token's data.
    #[must_use]
    pub fn get(&self, token: Token) -> &T {
        &self.data[token.index()]
    }

    /// Get a mutable reference to a token's data.
    pub fn get_mut(&mut self, token: Token) -> &mut T {
        &mut self.data[token.index()]
    }

    /// Iterate over (Token, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &T)> {
        Token::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Token, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Token, &mut T)> {
        Token::BOTH.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Token> for TokenMap<T> {
    type Output = T;

    fn index(&self, token: Token) -> &Self::Output {
        self.get(token)
    }
}

impl<T> IndexMut<Token> for TokenMap<T> {
    fn index_mut(&mut self, token: Token) -> &mut Self::Output {
        self.get_mut(token)
    }
}
