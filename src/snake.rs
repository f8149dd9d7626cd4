use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`, unclamped.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Inserts a new head in front of the current one.
    pub(crate) fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Drops the tail segment, never shrinking below one segment.
    pub(crate) fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_is_half_open() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 9, y: 7 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 3, y: 8 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 0 }.is_within_bounds(bounds));
    }

    #[test]
    fn stepping_follows_direction_vector() {
        let origin = Position { x: 5, y: 5 };

        assert_eq!(origin.stepped(Direction::Up), Position { x: 5, y: 4 });
        assert_eq!(origin.stepped(Direction::Right), Position { x: 6, y: 5 });
    }

    #[test]
    fn head_insert_and_tail_remove_keep_order() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        snake.push_head(Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.tail(), Position { x: 5, y: 5 });

        snake.pop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn last_segment_is_never_removed() {
        let mut snake = Snake::new(Position { x: 1, y: 1 });

        snake.pop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position { x: 1, y: 1 });
        assert!(!snake.is_empty());
    }

    #[test]
    fn empty_segment_list_is_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }
}
