use ratatui::layout::Size;
use ratatui::style::Color;

use crate::grid::{GridSize, Position};

/// Drawing surface the entities paint themselves onto.
///
/// Positions and sizes are in pixels. Nothing is cleared implicitly between
/// frames; whatever was painted stays until painted over.
pub trait Canvas {
    fn fill_rect(&mut self, position: Position, size: Size, color: Color);

    /// Draws a one-pixel border around the rectangle.
    fn outline_rect(&mut self, position: Position, size: Size, color: Color);

    /// Paints the whole surface with `color`.
    fn clear(&mut self, color: Color);
}

/// What a single grid cell currently shows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Paint {
    pub fill: Color,
    pub outline: Option<Color>,
}

impl Paint {
    #[must_use]
    pub fn solid(fill: Color) -> Self {
        Self {
            fill,
            outline: None,
        }
    }
}

/// Persistent cell-resolution surface.
///
/// Pixel rectangles are snapped to the cells they cover, which is exact for
/// everything the game draws since entities are cell aligned.
#[derive(Debug, Clone)]
pub struct CellField {
    grid: GridSize,
    cells: Vec<Paint>,
}

impl CellField {
    #[must_use]
    pub fn new(grid: GridSize, background: Color) -> Self {
        Self {
            grid,
            cells: vec![Paint::solid(background); grid.total_cells()],
        }
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns the paint of the cell containing `position`.
    #[must_use]
    pub fn paint_at(&self, position: Position) -> Option<Paint> {
        if !position.is_within_bounds(self.grid) {
            return None;
        }
        let column = usize::try_from(position.x / self.grid.cell()).ok()?;
        let row = usize::try_from(position.y / self.grid.cell()).ok()?;
        self.cells
            .get(row * usize::from(self.grid.columns()) + column)
            .copied()
    }

    /// Iterates over `(column, row, paint)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, Paint)> + '_ {
        let columns = usize::from(self.grid.columns().max(1));
        self.cells.iter().enumerate().filter_map(move |(index, paint)| {
            let column = u16::try_from(index % columns).ok()?;
            let row = u16::try_from(index / columns).ok()?;
            Some((column, row, *paint))
        })
    }

    /// Number of cells whose fill is not `background`.
    #[must_use]
    pub fn painted_count(&self, background: Color) -> usize {
        self.cells
            .iter()
            .filter(|paint| paint.fill != background)
            .count()
    }

    fn for_each_covered(
        &mut self,
        position: Position,
        size: Size,
        mut apply: impl FnMut(&mut Paint),
    ) {
        let cell = self.grid.cell();
        let columns = i32::from(self.grid.columns());
        let rows = i32::from(self.grid.rows());

        let first_column = position.x.div_euclid(cell).max(0);
        let first_row = position.y.div_euclid(cell).max(0);
        let end_column = (position.x + i32::from(size.width) + cell - 1)
            .div_euclid(cell)
            .min(columns);
        let end_row = (position.y + i32::from(size.height) + cell - 1)
            .div_euclid(cell)
            .min(rows);

        for row in first_row..end_row {
            for column in first_column..end_column {
                let Ok(index) = usize::try_from(row * columns + column) else {
                    continue;
                };
                if let Some(paint) = self.cells.get_mut(index) {
                    apply(paint);
                }
            }
        }
    }
}

impl Canvas for CellField {
    fn fill_rect(&mut self, position: Position, size: Size, color: Color) {
        self.for_each_covered(position, size, |paint| *paint = Paint::solid(color));
    }

    fn outline_rect(&mut self, position: Position, size: Size, color: Color) {
        self.for_each_covered(position, size, |paint| paint.outline = Some(color));
    }

    fn clear(&mut self, color: Color) {
        self.cells.fill(Paint::solid(color));
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Size;
    use ratatui::style::Color;

    use crate::config::DEFAULT_GRID;
    use crate::grid::{GridSize, Position};

    use super::{Canvas, CellField, Paint};

    const CELL: Size = Size {
        width: 20,
        height: 20,
    };

    #[test]
    fn new_field_is_background_everywhere() {
        let field = CellField::new(DEFAULT_GRID, Color::Black);

        assert_eq!(field.cells().count(), 768);
        assert_eq!(field.painted_count(Color::Black), 0);
    }

    #[test]
    fn fill_paints_exactly_the_covered_cell() {
        let mut field = CellField::new(DEFAULT_GRID, Color::Black);

        field.fill_rect(Position::new(40, 60), CELL, Color::Red);

        assert_eq!(
            field.paint_at(Position::new(40, 60)),
            Some(Paint::solid(Color::Red))
        );
        assert_eq!(field.painted_count(Color::Black), 1);
    }

    #[test]
    fn outline_keeps_fill_and_fill_resets_outline() {
        let mut field = CellField::new(DEFAULT_GRID, Color::Black);
        let position = Position::new(0, 0);

        field.fill_rect(position, CELL, Color::Green);
        field.outline_rect(position, CELL, Color::Cyan);
        assert_eq!(
            field.paint_at(position),
            Some(Paint {
                fill: Color::Green,
                outline: Some(Color::Cyan),
            })
        );

        field.fill_rect(position, CELL, Color::Black);
        assert_eq!(field.paint_at(position), Some(Paint::solid(Color::Black)));
    }

    #[test]
    fn rectangles_outside_the_field_are_clipped() {
        let mut field = CellField::new(DEFAULT_GRID, Color::Black);

        field.fill_rect(Position::new(620, 460), Size::new(60, 60), Color::Red);
        field.fill_rect(Position::new(-40, -40), CELL, Color::Red);

        assert_eq!(field.painted_count(Color::Black), 1);
        assert_eq!(field.paint_at(Position::new(640, 0)), None);
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut field = CellField::new(DEFAULT_GRID, Color::Black);
        field.fill_rect(Position::new(0, 0), Size::new(640, 480), Color::Red);
        assert_eq!(field.painted_count(Color::Black), 768);

        field.clear(Color::Black);

        assert_eq!(field.painted_count(Color::Black), 0);
    }

    #[test]
    fn cells_iterate_in_row_major_order() {
        let field = CellField::new(DEFAULT_GRID, Color::Black);
        let mut cells = field.cells();

        assert_eq!(cells.next().map(|(x, y, _)| (x, y)), Some((0, 0)));
        assert_eq!(cells.nth(31).map(|(x, y, _)| (x, y)), Some((0, 1)));
    }

    #[test]
    fn cells_report_exact_coordinates_on_large_grids() {
        // One-pixel cells: 307 200 cells, well past u16 indexing.
        let grid = GridSize {
            width: 640,
            height: 480,
            cell_size: 1,
        };
        let mut field = CellField::new(grid, Color::Black);
        field.fill_rect(Position::new(639, 479), Size::new(1, 1), Color::Red);

        assert_eq!(field.cells().count(), 307_200);
        assert_eq!(
            field.cells().last(),
            Some((639, 479, Paint::solid(Color::Red)))
        );
        assert_eq!(
            field.cells().nth(65_536).map(|(x, y, _)| (x, y)),
            Some((256, 102))
        );
    }
}
