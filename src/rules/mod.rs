//! Round and match rules for grid games.
//!
//! - `win`: line-based win and draw detection
//! - `Round`: one grid from empty to won or drawn
//! - `MatchState`: round wins counted up to a target
//!
//! Nothing here logs, prints or reads input. Those belong to the session
//! loop and the binary.

pub mod matches;
pub mod round;
pub mod win;

pub use matches::{MatchState, MatchStatus, DEFAULT_MATCH_TARGET};
pub use round::{MoveReport, Round, RoundStatus, Ruleset};
pub use win::{is_draw, winner, winning_line, LineTally};
