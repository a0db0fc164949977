//! Integration tests for the engine through the public facade.

use tui_snake::core::GameState;
use tui_snake::types::{Direction, GameAction, Point, TickOutcome, FOOD_SCORE, SPAWN_POINT};

/// Pick the next direction greedily toward the food, avoiding reversals and
/// immediate collisions. Good enough to eat reliably on a sparse board.
fn steer(game: &GameState) -> Option<Direction> {
    let head = game.snake().head();
    let food = game.food()?;

    let mut candidates = Vec::new();
    if food.x > head.x {
        candidates.push(Direction::Right);
    } else if food.x < head.x {
        candidates.push(Direction::Left);
    }
    if food.y > head.y {
        candidates.push(Direction::Down);
    } else if food.y < head.y {
        candidates.push(Direction::Up);
    }
    candidates.extend([
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]);

    candidates.into_iter().find(|&dir| {
        let target = head.step(dir);
        !dir.is_opposite(game.direction()) && target.in_bounds() && !game.snake().contains(target)
    })
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(12345);

    assert_eq!(game.snake().head(), SPAWN_POINT);
    assert_eq!(game.direction(), Direction::Right);
    assert!(!game.game_over());
    assert!(!game.paused());

    let outcome = game.tick();
    assert_eq!(outcome, TickOutcome::Moved);
    assert_eq!(game.snake().head(), Point::new(8, 7));
}

#[test]
fn test_running_right_hits_the_wall() {
    let mut game = GameState::new(6);

    // Moving right forever must terminate within the grid width, whatever
    // the snake eats along the way.
    let mut ticks = 0;
    while !game.game_over() {
        game.tick();
        ticks += 1;
        assert!(ticks <= 8, "wall collision must occur within 8 ticks");
    }
    assert_eq!(game.snake().head().x, 14);
}

#[test]
fn test_greedy_player_eats_and_scores() {
    let mut game = GameState::new(2026);

    for _ in 0..200 {
        if game.game_over() || game.score() >= 3 * FOOD_SCORE {
            break;
        }
        if let Some(dir) = steer(&game) {
            game.set_direction(dir);
        }
        let len_before = game.snake().len();
        match game.tick() {
            TickOutcome::AteFood => assert_eq!(game.snake().len(), len_before + 1),
            TickOutcome::Moved => assert_eq!(game.snake().len(), len_before),
            TickOutcome::GameOver | TickOutcome::Idle => {}
        }
    }

    assert!(
        game.score() >= FOOD_SCORE,
        "greedy play must eat at least once"
    );
    assert_eq!(game.score() % FOOD_SCORE, 0, "score moves in fixed steps");
}

#[test]
fn test_pause_resume_via_actions() {
    let mut game = GameState::new(99);

    game.apply_action(GameAction::TogglePause);
    assert!(game.paused());

    let head_before = game.snake().head();
    for _ in 0..5 {
        assert_eq!(game.tick(), TickOutcome::Idle);
    }
    assert_eq!(game.snake().head(), head_before);

    game.apply_action(GameAction::TogglePause);
    assert!(!game.paused());
    assert_eq!(game.tick(), TickOutcome::Moved);
}

#[test]
fn test_restart_after_game_over() {
    let mut game = GameState::new(4);
    while !game.game_over() {
        game.tick();
    }

    game.apply_action(GameAction::Restart);

    assert!(!game.game_over());
    assert_eq!(game.snake().head(), SPAWN_POINT);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.score(), 0);
    assert_eq!(game.episode_id(), 1);
}

#[test]
fn test_reversal_is_ignored_through_actions() {
    let mut game = GameState::new(5);

    game.apply_action(GameAction::Turn(Direction::Left));
    assert_eq!(game.direction(), Direction::Right);

    game.apply_action(GameAction::Turn(Direction::Down));
    assert_eq!(game.direction(), Direction::Down);

    game.apply_action(GameAction::Turn(Direction::Up));
    assert_eq!(game.direction(), Direction::Down);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(31337);
    let mut b = GameState::new(31337);

    for _ in 0..50 {
        if let Some(dir) = steer(&a) {
            a.set_direction(dir);
            b.set_direction(dir);
        }
        a.tick();
        b.tick();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
