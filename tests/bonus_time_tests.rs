//! Bonus-time tests driven by a manual clock.
//!
//! These verify the per-card bonus window:
//! - Time is consumed only while a card is face up and unmatched
//! - Face-down and matched cards are frozen
//! - Reading bonus values never changes state

use std::time::Duration;

use memorize::{Card, GameConfig, GameRng, ManualClock, MemoryGame};

type Game = MemoryGame<char, ManualClock>;

fn game_with_limit(limit: Duration) -> (Game, ManualClock) {
    let clock = ManualClock::new();
    let game = MemoryGame::with_config(
        3,
        |pair| ['X', 'Y', 'Z'][pair],
        &GameConfig::new().with_bonus_time_limit(limit),
        clock.clone(),
        &mut GameRng::new(2024),
    );
    (game, clock)
}

fn pair(game: &Game, content: char) -> (Card<char>, Card<char>) {
    let cards: Vec<_> = game.cards().iter().filter(|c| *c.content() == content).cloned().collect();
    (cards[0].clone(), cards[1].clone())
}

fn remaining(game: &Game, card: &Card<char>) -> Duration {
    game.card(card.id()).unwrap().bonus_time_remaining(game.now())
}

#[test]
fn test_consumed_while_face_up() {
    let (mut game, clock) = game_with_limit(Duration::from_secs(6));
    let (x, _) = pair(&game, 'X');

    game.choose(&x);
    clock.advance(Duration::from_secs(2));
    assert_eq!(remaining(&game, &x), Duration::from_secs(4));

    clock.advance(Duration::from_secs(1));
    assert_eq!(remaining(&game, &x), Duration::from_secs(3));
}

#[test]
fn test_frozen_while_face_down() {
    let (mut game, clock) = game_with_limit(Duration::from_secs(6));
    let (x, _) = pair(&game, 'X');
    let (y, _) = pair(&game, 'Y');

    game.choose(&x);
    clock.advance(Duration::from_secs(2));
    game.choose(&y); // flips x down

    let frozen = remaining(&game, &x);
    clock.advance(Duration::from_secs(30));
    assert_eq!(remaining(&game, &x), frozen);
    assert_eq!(frozen, Duration::from_secs(4));
}

#[test]
fn test_time_accumulates_across_reveals() {
    let (mut game, clock) = game_with_limit(Duration::from_secs(6));
    let (x, _) = pair(&game, 'X');
    let (y, _) = pair(&game, 'Y');

    game.choose(&x);
    clock.advance(Duration::from_secs(2));
    game.choose(&y);
    clock.advance(Duration::from_secs(5));
    game.choose(&x);
    clock.advance(Duration::from_secs(1));

    let card = game.card(x.id()).unwrap();
    assert_eq!(card.past_face_up_time(), Duration::from_secs(2));
    assert_eq!(card.face_up_time(game.now()), Duration::from_secs(3));
    assert_eq!(remaining(&game, &x), Duration::from_secs(3));
}

#[test]
fn test_match_in_time_earns_bonus() {
    let (mut game, clock) = game_with_limit(Duration::from_secs(6));
    let (x1, x2) = pair(&game, 'X');

    game.choose(&x1);
    clock.advance(Duration::from_secs(3));
    game.choose(&x2);

    clock.advance(Duration::from_secs(100));
    let first = game.card(x1.id()).unwrap();
    assert!(first.has_earned_bonus(game.now()));
    assert!((first.bonus_remaining_fraction(game.now()) - 0.5).abs() < 1e-9);
    assert!(game.card(x2.id()).unwrap().has_earned_bonus(game.now()));
}

#[test]
fn test_slow_match_earns_nothing() {
    let (mut game, clock) = game_with_limit(Duration::from_secs(6));
    let (x1, x2) = pair(&game, 'X');

    game.choose(&x1);
    clock.advance(Duration::from_secs(8));
    assert!(!game.card(x1.id()).unwrap().is_consuming_bonus_time(game.now()));
    game.choose(&x2);

    let first = game.card(x1.id()).unwrap();
    assert!(first.is_matched());
    assert!(!first.has_earned_bonus(game.now()));
    assert_eq!(first.bonus_remaining_fraction(game.now()), 0.0);
}

#[test]
fn test_zero_limit_disables_bonus() {
    let (mut game, clock) = game_with_limit(Duration::ZERO);
    let (x1, x2) = pair(&game, 'X');

    game.choose(&x1);
    assert_eq!(game.card(x1.id()).unwrap().last_face_up_timestamp(), None);
    clock.advance(Duration::from_millis(10));
    game.choose(&x2);

    for view in game.views() {
        assert_eq!(view.bonus_remaining_fraction, 0.0);
        assert!(!view.has_earned_bonus);
        assert!(!view.is_consuming_bonus_time);
    }
}

#[test]
fn test_polling_does_not_mutate() {
    let (mut game, clock) = game_with_limit(Duration::from_secs(6));
    let (x, _) = pair(&game, 'X');
    game.choose(&x);
    let before = game.snapshot();

    for _ in 0..10 {
        clock.advance(Duration::from_millis(250));
        let _ = game.views();
        let _ = remaining(&game, &x);
    }

    assert_eq!(game.cards(), &before);
}

#[test]
fn test_ignored_choose_does_not_fold() {
    let (mut game, clock) = game_with_limit(Duration::from_secs(6));
    let (x, _) = pair(&game, 'X');
    game.choose(&x);
    clock.advance(Duration::from_secs(1));

    game.choose(&x);
    game.choose(&x);

    let card = game.card(x.id()).unwrap();
    assert_eq!(card.past_face_up_time(), Duration::ZERO);
    assert!(card.last_face_up_timestamp().is_some());
    assert_eq!(remaining(&game, &x), Duration::from_secs(5));
}
