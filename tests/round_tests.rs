//! Round state machine scenarios for Connect Four and Tic-Tac-Toe.
//!
//! These drive `Round::submit_move` directly, without strategies or a
//! session, and check statuses, winning lines and rejections.

use parlor::games::tictactoe;
use parlor::{
    Cell, Coord, Grid, IllegalMove, Move, MoveError, Round, RoundStatus, Ruleset, Token,
};

fn squares(round: &mut Round, numbers: &[usize]) -> Vec<RoundStatus> {
    numbers
        .iter()
        .map(|&n| {
            let coord = tictactoe::square(n).unwrap();
            round.submit_move(Move::At(coord)).unwrap().status
        })
        .collect()
}

// =============================================================================
// Connect Four
// =============================================================================

/// Four across the bottom row wins on the fourth disc.
#[test]
fn test_connect_four_bottom_row_win() {
    let mut round = Round::new(&Ruleset::connect_four(), Token::First);

    // Second stacks on top of First's discs and never threatens.
    for col in 0..3 {
        let report = round.submit_move(Move::Column(col)).unwrap();
        assert_eq!(report.coord, Coord::new(0, col));
        assert_eq!(report.status, RoundStatus::InProgress);
        let report = round.submit_move(Move::Column(col)).unwrap();
        assert_eq!(report.coord, Coord::new(1, col));
    }

    let report = round.submit_move(Move::Column(3)).unwrap();
    assert_eq!(report.token, Token::First);
    assert_eq!(report.move_number, 7);
    assert_eq!(report.status, RoundStatus::Won(Token::First));
    assert_eq!(round.status(), RoundStatus::Won(Token::First));

    let line = round.winning_line().unwrap();
    assert_eq!(
        line.as_slice(),
        &[
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(0, 3)
        ]
    );
}

/// Vertical four in one column.
#[test]
fn test_connect_four_vertical_win() {
    let mut round = Round::new(&Ruleset::connect_four(), Token::Second);
    for _ in 0..3 {
        round.submit_move(Move::Column(6)).unwrap();
        round.submit_move(Move::Column(0)).unwrap();
    }
    let report = round.submit_move(Move::Column(6)).unwrap();
    assert_eq!(report.status, RoundStatus::Won(Token::Second));
    assert_eq!(report.coord, Coord::new(3, 6));
}

/// A full column reports no empty row and refuses further drops.
#[test]
fn test_full_column_rejected() {
    let mut round = Round::new(&Ruleset::connect_four(), Token::First);
    for _ in 0..6 {
        round.submit_move(Move::Column(2)).unwrap();
    }
    assert_eq!(round.grid().lowest_empty_row(2), Ok(None));
    assert!(!round.legal_moves().contains(&Move::Column(2)));

    let before = round.grid().clone();
    let active = round.active();
    let err = round.submit_move(Move::Column(2)).unwrap_err();
    assert_eq!(err, MoveError::Illegal(IllegalMove::ColumnFull(2)));
    assert!(err.is_recoverable());

    assert_eq!(round.grid(), &before);
    assert_eq!(round.active(), active);
    assert_eq!(round.move_count(), 6);
}

/// Columns beyond the grid are out of bounds, not illegal, but a strategy
/// may still try again.
#[test]
fn test_column_out_of_bounds() {
    let mut round = Round::new(&Ruleset::connect_four(), Token::First);
    let err = round.submit_move(Move::Column(7)).unwrap_err();
    assert_eq!(err, MoveError::OutOfBounds(Move::Column(7)));
    assert!(err.is_recoverable());
    assert_eq!(round.move_count(), 0);
}

/// Placing a specific cell on a drop grid is the wrong kind of move.
#[test]
fn test_wrong_move_kind() {
    let mut round = Round::new(&Ruleset::connect_four(), Token::First);
    let mv = Move::At(Coord::new(0, 0));
    assert_eq!(
        round.submit_move(mv),
        Err(MoveError::Illegal(IllegalMove::WrongKind(mv)))
    );

    let mut round = Round::new(&Ruleset::tic_tac_toe(), Token::First);
    assert_eq!(
        round.submit_move(Move::Column(1)),
        Err(MoveError::Illegal(IllegalMove::WrongKind(Move::Column(1))))
    );
}

// =============================================================================
// Tic-Tac-Toe
// =============================================================================

/// Top row for First, with Second at 4 and 5: the win lands on the fifth move.
#[test]
fn test_tic_tac_toe_top_row_win() {
    let mut round = Round::new(&Ruleset::tic_tac_toe(), Token::First);
    let statuses = squares(&mut round, &[1, 4, 2, 5, 3]);

    assert!(statuses[..4].iter().all(|s| *s == RoundStatus::InProgress));
    assert_eq!(statuses[4], RoundStatus::Won(Token::First));
    assert_eq!(round.status().winner(), Some(Token::First));
    assert_eq!(round.active(), Token::First);
}

/// A full board with no line is drawn.
#[test]
fn test_tic_tac_toe_draw() {
    // X O X
    // X O O
    // O X X
    let mut round = Round::new(&Ruleset::tic_tac_toe(), Token::First);
    let statuses = squares(&mut round, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);

    assert!(statuses[..8].iter().all(|s| *s == RoundStatus::InProgress));
    assert_eq!(round.status(), RoundStatus::Drawn);
    assert_eq!(round.status().winner(), None);
    assert!(round.grid().is_full());
    assert!(round.winning_line().is_none());
    assert!(round.legal_moves().is_empty());
}

/// An occupied square is rejected and the same token stays on move.
#[test]
fn test_occupied_square_rejected() {
    let mut round = Round::new(&Ruleset::tic_tac_toe(), Token::First);
    squares(&mut round, &[5]);

    let centre = tictactoe::square(5).unwrap();
    assert_eq!(
        round.submit_move(Move::At(centre)),
        Err(MoveError::Illegal(IllegalMove::CellOccupied(centre)))
    );
    assert_eq!(round.active(), Token::Second);
    assert_eq!(round.grid().cell_at(centre), Ok(Cell::Marked(Token::First)));
}

/// A finished round refuses every move and stays unchanged.
#[test]
fn test_finished_round_refuses_moves() {
    let mut round = Round::new(&Ruleset::tic_tac_toe(), Token::First);
    squares(&mut round, &[1, 4, 2, 5, 3]);
    let before = round.grid().clone();

    let open = tictactoe::square(9).unwrap();
    let err = round.submit_move(Move::At(open)).unwrap_err();
    assert_eq!(err, MoveError::Illegal(IllegalMove::RoundOver));
    assert!(err.is_round_over());
    assert!(!round.is_legal(Move::At(open)));
    assert_eq!(round.grid(), &before);
    assert_eq!(round.move_count(), 5);
}

/// Resetting a round clears the grid and sets the new starter.
#[test]
fn test_reset_round() {
    let mut round = Round::new(&Ruleset::tic_tac_toe(), Token::First);
    squares(&mut round, &[1, 4, 2, 5, 3]);

    round.reset(Token::Second);
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert_eq!(round.active(), Token::Second);
    assert_eq!(round.starting(), Token::Second);
    assert_eq!(round.move_count(), 0);
    assert_eq!(round.legal_moves().len(), 9);
}

/// Grids serialize for replays and snapshots.
#[test]
fn test_grid_json_snapshot() {
    let mut round = Round::new(&Ruleset::tic_tac_toe(), Token::First);
    squares(&mut round, &[1, 5]);

    let json = serde_json::to_string(round.grid()).unwrap();
    let restored: Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, round.grid());
    assert_eq!(restored.marked_coords().len(), 2);
}

/// A snapshot whose cells do not fill its shape is refused.
#[test]
fn test_grid_json_with_missing_cells_is_rejected() {
    let json = r#"{
        "shape": {"rows": 3, "cols": 3, "win_length": 3, "placement": "Free"},
        "cells": ["Empty"]
    }"#;
    assert!(serde_json::from_str::<Grid>(json).is_err());
}

/// A snapshot with an impossible shape is refused too.
#[test]
fn test_grid_json_with_bad_shape_is_rejected() {
    let json = r#"{
        "shape": {"rows": 3, "cols": 3, "win_length": 5, "placement": "Free"},
        "cells": ["Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"]
    }"#;
    assert!(serde_json::from_str::<Grid>(json).is_err());
}
