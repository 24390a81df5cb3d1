use std::collections::VecDeque;

use crate::basic::{Dir, GridPoint};

/// The snake itself: body cells plus direction state.
///
/// The head is at the front of `segments`. The direction the player
/// asked for is kept separate from the direction the snake is actually
/// going; it only takes effect on the next call to [`Snake::advance`].
pub struct Snake {
    pub segments: VecDeque<GridPoint>,
    /// Direction the snake is currently going.
    pub dir: Dir,
    /// Direction requested since the last tick.
    dir_intent: Dir,
}

impl Snake {
    pub fn new(head: GridPoint, dir: Dir, len: usize) -> Self {
        assert!(len >= 1, "snake must have at least a head");
        let segments = (0..len).map(|i| head.translate(-dir, i as isize)).collect();
        Self { segments, dir, dir_intent: dir }
    }

    pub fn head(&self) -> GridPoint {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn occupies(&self, pos: GridPoint) -> bool {
        self.segments.contains(&pos)
    }

    pub fn dir_intent(&self) -> Dir {
        self.dir_intent
    }

    /// Ask the snake to turn. Ignored if it would reverse the current
    /// direction in place, a later request in the same tick may still
    /// override an earlier one.
    pub fn request_dir(&mut self, dir: Dir) {
        if dir != -self.dir {
            self.dir_intent = dir;
        }
    }

    /// Move one cell in the committed direction and return the new
    /// head. Collision checks are the caller's business.
    pub fn advance(&mut self) -> GridPoint {
        self.dir = self.dir_intent;
        let new_head = self.head().translate(self.dir, 1);
        self.segments.push_front(new_head);
        self.segments.pop_back();
        new_head
    }

    /// Grow by `n` segments. The new segments overlap the current tail
    /// and unfold as the snake moves.
    pub fn grow_tail(&mut self, n: usize) {
        let tail = self.segments[self.segments.len() - 1];
        for _ in 0..n {
            self.segments.push_back(tail);
        }
    }

    /// Head equals some non-head segment.
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&segment| segment == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir::*;

    fn snake3() -> Snake {
        Snake::new(GridPoint { x: 10, y: 10 }, R, 3)
    }

    #[test]
    fn new_lays_body_out_behind_the_head() {
        let snake = snake3();
        let expected = [
            GridPoint { x: 10, y: 10 },
            GridPoint { x: 9, y: 10 },
            GridPoint { x: 8, y: 10 },
        ];
        assert!(snake.segments.iter().eq(expected.iter()));
    }

    #[test]
    fn advance_preserves_length() {
        let mut snake = snake3();
        for _ in 0..10 {
            snake.advance();
            assert_eq!(snake.len(), 3);
        }
        assert_eq!(snake.head(), GridPoint { x: 20, y: 10 });
    }

    #[test]
    fn grow_tail_adds_overlapping_segments() {
        let mut snake = snake3();
        snake.grow_tail(1);
        assert_eq!(snake.len(), 4);
        // duplicate tail resolves as the snake moves on
        snake.advance();
        assert_eq!(snake.len(), 4);
        let mut sorted: Vec<_> = snake.segments.iter().copied().collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn reversal_request_is_ignored() {
        let mut snake = snake3();
        snake.request_dir(L);
        assert_eq!(snake.dir_intent(), R);
        snake.advance();
        assert_eq!(snake.dir, R);
    }

    #[test]
    fn perpendicular_request_is_committed_on_advance() {
        let mut snake = snake3();
        snake.request_dir(U);
        // nothing changes until the tick
        assert_eq!(snake.dir, R);
        let head = snake.advance();
        assert_eq!(snake.dir, U);
        assert_eq!(head, GridPoint { x: 10, y: 9 });
    }

    #[test]
    fn later_request_in_same_tick_wins() {
        let mut snake = snake3();
        snake.request_dir(U);
        snake.request_dir(D);
        snake.advance();
        assert_eq!(snake.dir, D);
    }

    #[test]
    fn hits_self_after_turning_into_own_body() {
        let mut snake = Snake::new(GridPoint { x: 10, y: 10 }, R, 5);
        assert!(!snake.hits_self());
        // U, L, D traces a tight loop back into the body
        for dir in [U, L, D] {
            snake.request_dir(dir);
            snake.advance();
        }
        assert!(snake.hits_self());
    }
}
