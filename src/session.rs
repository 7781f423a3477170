//! The session loop: strategies, rounds and match scoring wired together.
//!
//! The session is the only layer that talks to strategies. It asks the
//! active token's strategy for a move, submits it to the round, and on a
//! recoverable rejection asks the same strategy again. Progress is reported
//! to an `Observer` (the binary renders from it) and to `tracing`.

use std::num::NonZeroU32;

use tracing::{debug, info, info_span, warn};

use crate::core::{Token, TokenMap};
use crate::error::{MoveError, SessionError};
use crate::grid::Move;
use crate::rules::{MatchState, MoveReport, Round, RoundStatus, Ruleset, DEFAULT_MATCH_TARGET};
use crate::strategy::MoveStrategy;

/// One strategy per token, fixed for the whole match.
pub struct Seating {
    seats: TokenMap<Box<dyn MoveStrategy>>,
}

impl Seating {
    #[must_use]
    pub fn new(first: Box<dyn MoveStrategy>, second: Box<dyn MoveStrategy>) -> Self {
        Self {
            seats: TokenMap::from_pair(first, second),
        }
    }

    #[must_use]
    pub fn name(&self, token: Token) -> &str {
        self.seats[token].name()
    }

    pub fn seat_mut(&mut self, token: Token) -> &mut dyn MoveStrategy {
        &mut *self.seats[token]
    }
}

/// Per-match settings for `play_match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSettings {
    pub target_score: NonZeroU32,
    pub first_to_move: Token,
    /// Swap the starting token after every round.
    pub alternate_first: bool,
    /// Consecutive rejected moves before a strategy is declared stuck.
    pub max_illegal_attempts: u32,
}

impl MatchSettings {
    #[must_use]
    pub fn new(target_score: NonZeroU32) -> Self {
        Self {
            target_score,
            first_to_move: Token::First,
            alternate_first: false,
            max_illegal_attempts: 10,
        }
    }

    #[must_use]
    pub fn with_first_to_move(mut self, token: Token) -> Self {
        self.first_to_move = token;
        self
    }

    #[must_use]
    pub fn with_alternate_first(mut self, alternate: bool) -> Self {
        self.alternate_first = alternate;
        self
    }

    #[must_use]
    pub fn with_max_illegal_attempts(mut self, attempts: u32) -> Self {
        self.max_illegal_attempts = attempts.max(1);
        self
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_TARGET)
    }
}

/// Callbacks for session progress. Every method defaults to doing nothing.
pub trait Observer {
    fn round_started(&mut self, _round: &Round, _state: &MatchState) {}

    fn move_made(&mut self, _round: &Round, _report: &MoveReport) {}

    fn move_rejected(&mut self, _token: Token, _mv: Move, _error: &MoveError) {}

    fn round_finished(&mut self, _round: &Round, _state: &MatchState) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Play one round to completion.
///
/// A strategy error ends the round immediately. Any rejected move, including
/// one outside the grid, is retried up to `max_illegal` times in a row
/// before failing with `SessionError::StuckStrategy`.
pub fn play_round(
    round: &mut Round,
    seating: &mut Seating,
    max_illegal: u32,
    observer: &mut dyn Observer,
) -> Result<RoundStatus, SessionError> {
    let mut rejected = 0;

    while !round.status().is_terminal() {
        let token = round.active();
        let legal = round.legal_moves();
        let mv = seating
            .seat_mut(token)
            .choose_move(round.grid(), &legal)
            .map_err(|source| SessionError::Strategy { token, source })?;

        match round.submit_move(mv) {
            Ok(report) => {
                rejected = 0;
                debug!(
                    token = %report.token,
                    mv = %report.mv,
                    move_number = report.move_number,
                    status = ?report.status,
                    "Move applied"
                );
                observer.move_made(round, &report);
            }
            Err(err) if err.is_recoverable() => {
                rejected += 1;
                warn!(token = %token, mv = %mv, error = %err, attempt = rejected, "Move rejected");
                observer.move_rejected(token, mv, &err);
                if rejected >= max_illegal {
                    return Err(SessionError::StuckStrategy {
                        token,
                        attempts: rejected,
                    });
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(round.status())
}

/// Play rounds until one token reaches the target score.
pub fn play_match(
    ruleset: &Ruleset,
    settings: &MatchSettings,
    seating: &mut Seating,
    observer: &mut dyn Observer,
) -> Result<MatchState, SessionError> {
    let mut state = MatchState::new(settings.target_score);
    let mut starting = settings.first_to_move;
    let mut round = Round::new(ruleset, starting);

    info!(
        first = seating.name(Token::First),
        second = seating.name(Token::Second),
        target = settings.target_score.get(),
        "Match started"
    );

    loop {
        let span = info_span!("round", number = state.rounds_played() + 1, starting = %starting);
        let _enter = span.enter();

        observer.round_started(&round, &state);
        let status = play_round(&mut round, seating, settings.max_illegal_attempts, observer)?;
        state.record_round(status);
        info!(
            status = ?status,
            moves = round.move_count(),
            first = state.score(Token::First),
            second = state.score(Token::Second),
            "Round finished"
        );
        observer.round_finished(&round, &state);

        if state.is_over() {
            break;
        }
        if settings.alternate_first {
            starting = starting.other();
        }
        round.reset(starting);
    }

    info!(winner = ?state.winner(), rounds = state.rounds_played(), "Match finished");
    Ok(state)
}
