use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, FOOD_REWARD};
use crate::food::spawn_position;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

/// Complete mutable game state for one session.
///
/// Owns the board, the snake and the food. The front end only reads it
/// through accessors and feeds it [`GameInput`]s and ticks.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    food: Option<Position>,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game on a board of `bounds` seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::new(bounds.center()),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            status: GameStatus::Playing,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng,
        };
        state.reset_game();
        state
    }

    /// Re-initializes every entity: a one-cell snake in the center heading
    /// right, fresh food, zero score.
    pub fn reset_game(&mut self) {
        self.snake = Snake::new(self.bounds.center());
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.tick_count = 0;
        self.food = spawn_position(&mut self.rng, self.bounds, &self.snake);

        if self.food.is_none() {
            self.end_game(DeathReason::BoardFilled);
            return;
        }

        info!(
            "new game on {}x{} board",
            self.bounds.width, self.bounds.height
        );
    }

    /// Requests a turn for the next tick.
    ///
    /// A request opposite to the last committed direction is ignored. Valid
    /// requests within one tick overwrite each other; only the last one is
    /// applied.
    pub fn set_direction(&mut self, requested: Direction) {
        if direction_change_is_valid(self.direction, requested) {
            self.pending_direction = requested;
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn update(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;

        let direction = self.pending_direction;
        let next_head = self.snake.head().stepped(direction);

        if !next_head.is_within_bounds(self.bounds) {
            self.end_game(DeathReason::WallCollision);
            return;
        }

        // The tail still counts as occupied even though it would move away.
        if self.snake.occupies(next_head) {
            self.end_game(DeathReason::SelfCollision);
            return;
        }

        self.direction = direction;
        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += FOOD_REWARD;
            debug!(
                "food eaten at ({}, {}), score {}, length {}",
                next_head.x,
                next_head.y,
                self.score,
                self.snake.len()
            );

            self.food = spawn_position(&mut self.rng, self.bounds, &self.snake);
            if self.food.is_none() {
                self.end_game(DeathReason::BoardFilled);
            }
        } else {
            self.snake.pop_tail();
        }
    }

    /// Applies one external input event.
    ///
    /// Restart only has an effect once the game is over; quitting is left to
    /// the caller.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.set_direction(direction);
                }
            }
            GameInput::Restart => {
                if self.status == GameStatus::GameOver {
                    self.reset_game();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Replaces snake, heading and food in one go, keeping score and status.
    ///
    /// Meant for scripted scenarios; the caller is responsible for keeping
    /// the snake inside the board and off the food.
    pub fn set_layout(&mut self, snake: Snake, direction: Direction, food: Position) {
        self.snake = snake;
        self.direction = direction;
        self.pending_direction = direction;
        self.food = Some(food);
    }

    fn end_game(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        info!(
            "game over ({reason:?}) after {} ticks, score {}, length {}",
            self.tick_count,
            self.score,
            self.snake.len()
        );
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Snake segments, head first.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current food cell; `None` only when the board is full.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Last committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Ticks simulated since the last reset.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
