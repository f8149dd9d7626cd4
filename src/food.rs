use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Uniform draws attempted before falling back to enumerating free cells.
pub const MAX_REJECTION_SAMPLES: usize = 64;

/// Picks a uniformly random cell not occupied by the snake.
///
/// Draws each axis independently and retries on collision. Once
/// [`MAX_REJECTION_SAMPLES`] draws have landed on the snake, picks uniformly
/// among the remaining free cells instead, so a nearly full board still
/// terminates. Returns `None` when every cell is occupied.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if bounds.total_cells() == 0 || snake.len() >= bounds.total_cells() {
        return None;
    }

    for _ in 0..MAX_REJECTION_SAMPLES {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let candidates = free_cells(bounds, snake);
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

/// Lists every cell the snake does not cover, row by row.
#[must_use]
pub fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    candidates
}
