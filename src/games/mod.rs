//! Game presets and the non-grid games.
//!
//! - `connect_four`, `tictactoe`: rulesets and numbering for the grid games
//! - `guess_who`: two players narrowing a roster down to a secret person
//! - `rps`: rock, paper, scissors, Spock, lizard against computer opponents
//! - `twenty_one`: the player against a dealer

pub mod connect_four;
pub mod guess_who;
pub mod rps;
pub mod tictactoe;
pub mod twenty_one;
