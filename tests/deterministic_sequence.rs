use grid_snake::config::GridSize;
use grid_snake::food::spawn_position;
use grid_snake::game::{DeathReason, GameState, GameStatus};
use grid_snake::input::{Direction, GameInput};
use grid_snake::snake::{Position, Snake};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        42,
    );

    state.set_layout(
        Snake::new(Position { x: 1, y: 1 }),
        Direction::Right,
        Position { x: 2, y: 1 },
    );

    state.update();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.score(), 10);
    assert_eq!(state.snake().len(), 2);
    assert_eq!(state.snake().head(), Position { x: 2, y: 1 });

    state.apply_input(GameInput::Direction(Direction::Up));
    state.update();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.snake().head(), Position { x: 2, y: 0 });

    let before = state.snake().clone();
    state.update();
    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.death_reason(), Some(DeathReason::WallCollision));
    assert_eq!(state.snake(), &before);

    state.apply_input(GameInput::Restart);
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.snake().len(), 1);
    assert_eq!(state.snake().head(), Position { x: 3, y: 2 });
}

#[test]
fn same_seed_replays_the_same_food_sequence() {
    let bounds = GridSize {
        width: 12,
        height: 9,
    };
    let first = GameState::new_with_seed(bounds, 2024);
    let second = GameState::new_with_seed(bounds, 2024);

    assert_eq!(first.food(), second.food());
}

#[test]
fn food_stays_off_the_snake_while_it_grows() {
    let bounds = GridSize {
        width: 5,
        height: 5,
    };
    let mut rng = StdRng::seed_from_u64(99);

    // Grow a snake along a serpentine path, checking every placement.
    let mut path = Vec::new();
    for y in 0..5 {
        for step in 0..5 {
            let x = if y % 2 == 0 { step } else { 4 - step };
            path.push(Position { x, y });
        }
    }

    for length in 1..path.len() {
        let segments: Vec<_> = path[..length].iter().rev().copied().collect();
        let snake = Snake::from_segments(segments).expect("non-empty prefix");
        let food = spawn_position(&mut rng, bounds, &snake).expect("free cell remains");

        assert!(food.is_within_bounds(bounds));
        assert!(!snake.occupies(food));
    }

    let full = Snake::from_segments(path).expect("full path");
    assert_eq!(spawn_position(&mut rng, bounds, &full), None);
}
