use rand::Rng;
use ratatui::layout::Size;

use crate::canvas::Canvas;
use crate::config::{APPLE_COLOR, BORDER_COLOR};
use crate::grid::{GridSize, Position};

/// The single apple on the field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Creates food on a random cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Self {
        Self::new(random_cell(rng, grid))
    }

    /// Moves the food to a fresh random cell and returns it.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: GridSize) -> Position {
        self.position = random_cell(rng, grid);
        self.position
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, grid: GridSize) {
        let size = Size::new(grid.cell_size, grid.cell_size);
        canvas.fill_rect(self.position, size, APPLE_COLOR);
        canvas.outline_rect(self.position, size, BORDER_COLOR);
    }
}

/// Picks a cell uniformly, each axis independently.
///
/// Cells under the snake are not excluded, so food may appear beneath it.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Position {
    let column = rng.gen_range(0..grid.columns());
    let row = rng.gen_range(0..grid.rows());
    grid.cell_position(column, row)
}
