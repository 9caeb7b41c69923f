use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::canvas::Canvas;
use crate::config::BOARD_BACKGROUND_COLOR;
use crate::food::Food;
use crate::grid::GridSize;
use crate::input::{self, Control, WindowEvent};
use crate::snake::{MoveOutcome, Snake};

/// What happened during one [`GameState::step`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickReport {
    /// Food was under the head and got eaten before moving.
    pub ate: bool,
    pub outcome: MoveOutcome,
}

impl TickReport {
    #[must_use]
    pub fn collided(self) -> bool {
        self.outcome == MoveOutcome::Collided
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub tick_count: u64,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with entropy-seeded food placement.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(grid);
        let food = Food::spawn(&mut rng, grid);

        Self {
            snake,
            food,
            tick_count: 0,
            grid,
            rng,
        }
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Feeds the events gathered since the last tick into the pending
    /// direction.
    pub fn handle_events<I>(&mut self, events: I) -> Control
    where
        I: IntoIterator<Item = WindowEvent>,
    {
        input::handle_events(&mut self.snake, events)
    }

    /// Advances the simulation by one tick without drawing.
    ///
    /// Food is checked against the head as it was last drawn, so growth from
    /// a meal shows up on the move after the head reached the apple.
    pub fn step(&mut self) -> TickReport {
        self.tick_count += 1;

        let ate = self.food.position == self.snake.head();
        if ate {
            self.snake.grow();
            let position = self.food.respawn(&mut self.rng, self.grid);
            debug!(
                length = self.snake.length(),
                x = position.x,
                y = position.y,
                "food eaten"
            );
        }

        self.snake.apply_pending_direction();
        let outcome = self.snake.move_forward();

        if outcome == MoveOutcome::Collided {
            let position = self.food.respawn(&mut self.rng, self.grid);
            info!(
                tick = self.tick_count,
                x = position.x,
                y = position.y,
                "snake ran into itself, restarting"
            );
        }

        trace!(tick = self.tick_count, head = ?self.snake.head(), "tick");
        TickReport { ate, outcome }
    }

    /// Draws the frame for `report`: a collision wipes the field first, then
    /// food and snake are painted on top.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, report: TickReport) {
        if report.collided() {
            canvas.clear(BOARD_BACKGROUND_COLOR);
        }

        self.food.draw(canvas, self.grid);
        self.snake.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use crate::canvas::{CellField, Paint};
    use crate::config::{APPLE_COLOR, BOARD_BACKGROUND_COLOR, DEFAULT_GRID, SNAKE_COLOR};
    use crate::food::Food;
    use crate::grid::Position;
    use crate::input::{Control, Direction, Key, WindowEvent};
    use crate::snake::{MoveOutcome, Snake};

    use super::GameState;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn seeded_states_place_food_identically() {
        let first = GameState::new_with_seed(DEFAULT_GRID, 9);
        let second = GameState::new_with_seed(DEFAULT_GRID, 9);

        assert_eq!(first.grid(), DEFAULT_GRID);
        assert_eq!(first.food, second.food);
        assert!(first.food.position.is_within_bounds(first.grid()));
    }

    #[test]
    fn food_at_next_head_grows_on_following_tick() {
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 1);
        state.food = Food::new(p(340, 240));

        let report = state.step();
        assert!(!report.ate);
        assert_eq!(state.snake.head(), p(340, 240));
        assert_eq!(state.snake.length(), 1);

        let report = state.step();
        assert!(report.ate);
        assert_eq!(report.outcome, MoveOutcome::Alive);
        assert_eq!(state.snake.length(), 2);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.last_vacated(), None);
        assert_eq!(state.snake.head(), p(360, 240));
    }

    #[test]
    fn pending_turn_is_applied_before_moving() {
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 2);
        state.food = Food::new(p(0, 0));

        let control = state.handle_events([WindowEvent::KeyDown(Key::Down)]);
        state.step();

        assert_eq!(control, Control::Continue);
        assert_eq!(state.snake.direction(), Direction::Down);
        assert_eq!(state.snake.head(), p(320, 260));
    }

    #[test]
    fn quit_event_is_reported() {
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 2);

        assert_eq!(state.handle_events([WindowEvent::Quit]), Control::Quit);
    }

    #[test]
    fn collision_resets_snake_and_moves_food() {
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 5);
        state.snake = Snake::from_segments(
            DEFAULT_GRID,
            vec![p(100, 100), p(120, 100), p(120, 120), p(100, 120), p(80, 120)],
            Direction::Down,
        );
        state.food = Food::new(p(600, 20));

        let report = state.step();

        assert!(report.collided());
        assert_eq!(state.snake.length(), 1);
        assert_eq!(state.snake.head(), DEFAULT_GRID.center());
        assert!(state.food.position.is_within_bounds(DEFAULT_GRID));
    }

    #[test]
    fn collision_frame_clears_the_old_body() {
        let mut field = CellField::new(DEFAULT_GRID, BOARD_BACKGROUND_COLOR);
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 5);
        state.snake = Snake::from_segments(
            DEFAULT_GRID,
            vec![p(100, 100), p(120, 100), p(120, 120), p(100, 120), p(80, 120)],
            Direction::Down,
        );
        state.snake.draw(&mut field);
        assert_eq!(field.painted_count(BOARD_BACKGROUND_COLOR), 5);

        let report = state.step();
        state.draw(&mut field, report);

        assert_eq!(
            field.paint_at(p(100, 100)),
            Some(Paint::solid(BOARD_BACKGROUND_COLOR))
        );
        assert_eq!(
            field.paint_at(DEFAULT_GRID.center()).map(|paint| paint.fill),
            Some(SNAKE_COLOR)
        );
        assert!(field.painted_count(BOARD_BACKGROUND_COLOR) <= 2);
    }

    #[test]
    fn normal_frame_draws_food_and_snake() {
        let mut field = CellField::new(DEFAULT_GRID, BOARD_BACKGROUND_COLOR);
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 8);
        state.food = Food::new(p(0, 0));

        let report = state.step();
        state.draw(&mut field, report);

        assert_eq!(
            field.paint_at(p(0, 0)).map(|paint| paint.fill),
            Some(APPLE_COLOR)
        );
        assert_eq!(
            field.paint_at(p(340, 240)).map(|paint| paint.fill),
            Some(SNAKE_COLOR)
        );
        assert_eq!(field.painted_count(BOARD_BACKGROUND_COLOR), 2);
    }

    #[test]
    fn tick_count_advances_every_step() {
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 4);
        state.food = Food::new(p(0, 0));

        for _ in 0..3 {
            state.step();
        }

        assert_eq!(state.tick_count, 3);
    }
}
