use std::collections::VecDeque;

use crate::config::GridSize;
use crate::direction::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside `[0, side)` on both axes.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSize) -> bool {
        let side = i32::from(grid.get());
        self.x >= 0 && self.y >= 0 && self.x < side && self.y < side
    }

    /// Returns the neighbouring position one cell towards `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.unit_vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake segments, head first.
///
/// A `Snake` is never edited in place by the engine; each tick builds the next
/// one with [`Snake::advanced`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a horizontal snake with its head at `head` and `len` segments
    /// trailing towards negative x.
    #[must_use]
    pub fn horizontal(head: Position, len: usize) -> Self {
        let body = (0..len)
            .map(|offset| Position {
                x: head.x - offset as i32,
                y: head.y,
            })
            .collect();
        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
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

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Segments that stay put when the snake moves without growing.
    pub fn body_without_tail(&self) -> impl Iterator<Item = &Position> {
        self.body.iter().take(self.body.len().saturating_sub(1))
    }

    /// Builds the snake for the next tick: `next_head` is pushed in front and
    /// the tail is dropped unless `grow` is set.
    #[must_use]
    pub fn advanced(&self, next_head: Position, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(next_head);
        if !grow {
            let _ = body.pop_back();
        }
        Self { body }
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true when some cell is occupied by two segments.
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.body.len());
        self.body.iter().any(|segment| !seen.insert(*segment))
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
    use crate::direction::Direction;

    use super::{Position, Snake};

    #[test]
    fn horizontal_snake_trails_towards_negative_x() {
        let snake = Snake::horizontal(Position::new(2, 2), 3);
        let segments: Vec<_> = snake.segments().copied().collect();

        assert_eq!(
            segments,
            vec![Position::new(2, 2), Position::new(1, 2), Position::new(0, 2)]
        );
        assert_eq!(snake.tail(), Position::new(0, 2));
    }

    #[test]
    fn bounds_are_half_open() {
        let grid = GridSize::new(5).expect("valid grid");

        assert!(Position::new(0, 0).is_within_bounds(grid));
        assert!(Position::new(4, 4).is_within_bounds(grid));
        assert!(!Position::new(5, 2).is_within_bounds(grid));
        assert!(!Position::new(2, -1).is_within_bounds(grid));
    }

    #[test]
    fn stepping_follows_unit_vectors() {
        let origin = Position::new(3, 3);

        assert_eq!(origin.stepped(Direction::Up), Position::new(3, 2));
        assert_eq!(origin.stepped(Direction::Down), Position::new(3, 4));
        assert_eq!(origin.stepped(Direction::Left), Position::new(2, 3));
        assert_eq!(origin.stepped(Direction::Right), Position::new(4, 3));
    }

    #[test]
    fn advancing_without_growth_drops_tail_and_leaves_original() {
        let snake = Snake::horizontal(Position::new(2, 2), 3);
        let moved = snake.advanced(Position::new(3, 2), false);

        assert_eq!(moved.len(), 3);
        assert_eq!(moved.head(), Position::new(3, 2));
        assert_eq!(moved.tail(), Position::new(1, 2));
        assert_eq!(snake.head(), Position::new(2, 2));
    }

    #[test]
    fn advancing_with_growth_keeps_previous_tail() {
        let snake = Snake::horizontal(Position::new(2, 2), 3);
        let grown = snake.advanced(Position::new(3, 2), true);

        assert_eq!(grown.len(), 4);
        assert_eq!(grown.tail(), Position::new(0, 2));
    }

    #[test]
    fn body_without_tail_skips_last_segment() {
        let snake = Snake::horizontal(Position::new(2, 2), 3);
        let body: Vec<_> = snake.body_without_tail().copied().collect();

        assert_eq!(body, vec![Position::new(2, 2), Position::new(1, 2)]);
    }

    #[test]
    fn overlap_detection() {
        let straight = Snake::horizontal(Position::new(4, 0), 4);
        let crossed = Snake::from_segments(vec![
            Position::new(1, 1),
            Position::new(1, 0),
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ]);

        assert!(!straight.has_overlap());
        assert!(crossed.has_overlap());
    }
}
