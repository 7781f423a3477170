//! Core building blocks shared by every game: tokens and randomness.

pub mod rng;
pub mod token;

pub use rng::GameRng;
pub use token::{Token, TokenMap};
