//! Rock-paper-scissors-Spock-lizard: opponents, games and rematches.

use std::num::NonZeroU32;

use parlor::games::rps::opponents::{Chappie, Eve, Hal};
use parlor::games::rps::{Opponent, RpsMatch, Throw, ThrowStrategy};
use parlor::{GameRng, Token};

fn target(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

// =============================================================================
// Fixed opponents
// =============================================================================

/// R2D2 only throws rock, so paper sweeps the game.
#[test]
fn test_r2d2_loses_to_paper() {
    let mut rng = GameRng::new(1);
    let mut r2d2 = Opponent::R2d2.build();
    let mut game = RpsMatch::new(target(3));

    while !game.is_game_over() {
        let thrown = r2d2.choose_throw(game.history(), &mut rng);
        assert_eq!(thrown, Throw::Rock);
        game.play_round(Throw::Paper, thrown);
    }
    assert_eq!(game.score().winner(), Some(Token::First));
    assert_eq!(game.round(), 3);
    assert_eq!(game.games_won(Token::First), 1);
}

/// Number 5 repeats the human's previous throw.
#[test]
fn test_number5_copies_human() {
    let mut rng = GameRng::new(2);
    let mut number5 = Opponent::Number5.build();
    let mut game = RpsMatch::new(target(10));

    game.play_round(Throw::Spock, Throw::Rock);
    assert_eq!(number5.choose_throw(game.history(), &mut rng), Throw::Spock);
    game.play_round(Throw::Lizard, Throw::Spock);
    assert_eq!(number5.choose_throw(game.history(), &mut rng), Throw::Lizard);
}

/// Hal never throws paper.
#[test]
fn test_hal_never_paper() {
    let mut rng = GameRng::new(3);
    let mut hal = Hal::default();
    let game = RpsMatch::new(target(10));
    let throws: Vec<Throw> = (0..500)
        .map(|_| hal.choose_throw(game.history(), &mut rng))
        .collect();

    assert!(!throws.contains(&Throw::Paper));
    let scissors = throws.iter().filter(|t| **t == Throw::Scissors).count();
    assert!(scissors > 200, "scissors thrown {scissors} times");
}

/// The same seed gives Sonny the same throws.
#[test]
fn test_sonny_is_seeded() {
    let game = RpsMatch::new(target(10));
    let throws = |seed| {
        let mut rng = GameRng::new(seed);
        let mut sonny = Opponent::Sonny.build();
        (0..20)
            .map(|_| sonny.choose_throw(game.history(), &mut rng))
            .collect::<Vec<_>>()
    };
    assert_eq!(throws(8), throws(8));
}

// =============================================================================
// Adaptive opponents
// =============================================================================

/// Chappie leans toward what the human keeps throwing.
#[test]
fn test_chappie_drifts_toward_human() {
    let mut rng = GameRng::new(4);
    let mut chappie = Chappie::default();
    let mut game = RpsMatch::new(target(100));

    for _ in 0..10 {
        let thrown = chappie.choose_throw(game.history(), &mut rng);
        game.play_round(Throw::Lizard, thrown);
    }
    chappie.choose_throw(game.history(), &mut rng);

    let weights = chappie.weights();
    assert!(weights.weight(Throw::Lizard) > 50.0);
    assert!(weights.weight(Throw::Rock) < 20.0);
    assert!((weights.total() - 100.0).abs() < 1e-9);
    assert!(weights.weight(Throw::Lizard) <= 100.0);
}

/// EVE moves weight away from a throw that lost.
#[test]
fn test_eve_avoids_failing_throw() {
    let mut rng = GameRng::new(5);
    let mut eve = Eve::default();
    let mut game = RpsMatch::new(target(10));

    game.play_round(Throw::Paper, Throw::Rock);
    eve.choose_throw(game.history(), &mut rng);

    let weights = eve.weights();
    assert!((weights.weight(Throw::Rock) - 17.0).abs() < 1e-9);
    assert!((weights.weight(Throw::Paper) - 20.75).abs() < 1e-9);
    assert!((weights.total() - 100.0).abs() < 1e-9);
}

/// A round EVE wins leaves her weights alone.
#[test]
fn test_eve_keeps_winning_throw() {
    let mut rng = GameRng::new(6);
    let mut eve = Eve::default();
    let mut game = RpsMatch::new(target(10));

    game.play_round(Throw::Scissors, Throw::Rock);
    eve.choose_throw(game.history(), &mut rng);
    assert_eq!(eve.weights().weight(Throw::Rock), 20.0);
}

// =============================================================================
// Matches
// =============================================================================

/// History and games won survive a rematch; the score does not.
#[test]
fn test_rematch_keeps_history() {
    let mut game = RpsMatch::new(target(2));
    game.play_round(Throw::Rock, Throw::Lizard);
    game.play_round(Throw::Rock, Throw::Rock);
    game.play_round(Throw::Spock, Throw::Scissors);
    assert!(game.is_game_over());
    assert_eq!(game.score().draws(), 1);

    game.next_game();
    game.play_round(Throw::Rock, Throw::Paper);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.score().score(Token::Second), 1);
    assert_eq!(game.score().score(Token::First), 0);
    assert_eq!(game.games_won(Token::First), 1);

    let last = game.history().last().unwrap();
    assert_eq!(last.game, 2);
    assert_eq!(last.throw_of(Token::Second), Throw::Paper);
}

/// Opponents parse from names and menu numbers.
#[test]
fn test_opponent_parsing() {
    assert_eq!("number 5".parse::<Opponent>(), Ok(Opponent::Number5));
    assert_eq!("R2D2".parse::<Opponent>(), Ok(Opponent::R2d2));
    assert_eq!("eve".parse::<Opponent>(), Ok(Opponent::Eve));
    assert_eq!("6".parse::<Opponent>(), Ok(Opponent::Hal));
    assert!("7".parse::<Opponent>().is_err());
    assert!("wall-e".parse::<Opponent>().is_err());

    for opponent in Opponent::ALL {
        assert_eq!(opponent.build().name(), opponent.name());
    }
}
