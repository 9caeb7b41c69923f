use std::collections::VecDeque;

use ratatui::layout::Size;

use crate::canvas::Canvas;
use crate::config::{BOARD_BACKGROUND_COLOR, BORDER_COLOR, INITIAL_DIRECTION, SNAKE_COLOR};
use crate::grid::{GridSize, Position, wrap};
use crate::input::Direction;

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    Alive,
    /// The head ran into the body and the snake was reset.
    Collided,
}

/// Snake body, heading and growth bookkeeping.
///
/// `length` is the target segment count. It is bumped by [`Snake::grow`]
/// ahead of the next move, which then keeps the tail in place once.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    last: Option<Position>,
    grid: GridSize,
}

impl Snake {
    /// Creates a one-cell snake in the middle of `grid`.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            body: VecDeque::from([grid.center()]),
            length: 1,
            direction: INITIAL_DIRECTION,
            next_direction: None,
            last: None,
            grid,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The target length equals the number of segments. An empty list
    /// yields the centered starting snake.
    #[must_use]
    pub fn from_segments(grid: GridSize, segments: Vec<Position>, direction: Direction) -> Self {
        if segments.is_empty() {
            return Self::new(grid);
        }

        Self {
            length: segments.len(),
            body: VecDeque::from(segments),
            direction,
            next_direction: None,
            last: None,
            grid,
        }
    }

    /// Puts the snake back to its starting state.
    pub fn reset(&mut self) {
        *self = Self::new(self.grid);
    }

    /// Records a direction to apply on the next tick. Callers are
    /// responsible for rejecting reversals.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.next_direction = Some(direction);
    }

    /// Commits the pending direction, if any, and empties the slot.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Raises the target length by one; the next move keeps the tail.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Advances the head one cell in the current direction.
    ///
    /// The segment right behind the head and the one after it cannot be hit
    /// by a single step, so only segments from index 2 on count as a
    /// collision. A collision resets the snake instead of moving it.
    pub fn move_forward(&mut self) -> MoveOutcome {
        let next_head = wrap(self.head(), self.direction, self.grid);

        if self.body.iter().skip(2).any(|segment| *segment == next_head) {
            self.reset();
            return MoveOutcome::Collided;
        }

        self.body.push_front(next_head);
        self.last = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };

        MoveOutcome::Alive
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body
            .front()
            .copied()
            .unwrap_or_else(|| self.grid.center())
    }

    /// Cell given up by the last move, still to be erased on screen.
    #[must_use]
    pub fn last_vacated(&self) -> Option<Position> {
        self.last
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Target segment count.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
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

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Draws every segment, then erases the vacated cell.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let size = Size::new(self.grid.cell_size, self.grid.cell_size);
        for segment in &self.body {
            canvas.fill_rect(*segment, size, SNAKE_COLOR);
            canvas.outline_rect(*segment, size, BORDER_COLOR);
        }

        // On a one-cell-wide field the head can land on the cell it just left.
        if let Some(last) = self.last.filter(|cell| !self.occupies(*cell)) {
            canvas.fill_rect(last, size, BOARD_BACKGROUND_COLOR);
        }
    }
}
