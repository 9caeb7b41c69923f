use crate::input::Direction;

/// Pixel position of a cell's top-left corner.
///
/// Coordinates are always multiples of the cell size once they have passed
/// through [`wrap`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the field.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSize) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < grid.width() && self.y < grid.height()
    }

    /// Moves one cell in `direction`, re-entering from the opposite edge.
    #[must_use]
    pub fn stepped(self, direction: Direction, grid: GridSize) -> Self {
        wrap(self, direction, grid)
    }
}

/// Field dimensions in pixels together with the cell edge length.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
    pub cell_size: u16,
}

impl GridSize {
    /// Field width in pixels.
    #[must_use]
    pub fn width(self) -> i32 {
        i32::from(self.width)
    }

    /// Field height in pixels.
    #[must_use]
    pub fn height(self) -> i32 {
        i32::from(self.height)
    }

    #[must_use]
    pub fn cell(self) -> i32 {
        i32::from(self.cell_size)
    }

    /// Number of cell columns.
    #[must_use]
    pub fn columns(self) -> u16 {
        self.width / self.cell_size
    }

    /// Number of cell rows.
    #[must_use]
    pub fn rows(self) -> u16 {
        self.height / self.cell_size
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.columns()) * usize::from(self.rows())
    }

    /// Pixel position of the cell at `column`, `row`.
    #[must_use]
    pub fn cell_position(self, column: u16, row: u16) -> Position {
        Position {
            x: i32::from(column) * self.cell(),
            y: i32::from(row) * self.cell(),
        }
    }

    /// Cell closest to the middle of the field, rounded towards the origin.
    #[must_use]
    pub fn center(self) -> Position {
        self.cell_position(self.columns() / 2, self.rows() / 2)
    }
}

/// Adds one direction-scaled cell step to `position` and wraps each axis
/// modulo the field dimension.
#[must_use]
pub fn wrap(position: Position, direction: Direction, grid: GridSize) -> Position {
    let (dx, dy) = direction.delta();
    Position {
        x: wrap_axis(position.x + dx * grid.cell(), grid.width()),
        y: wrap_axis(position.y + dy * grid.cell(), grid.height()),
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

#[cfg(test)]
mod tests {
    use crate::config::DEFAULT_GRID;
    use crate::input::Direction;

    use super::{GridSize, Position, wrap};

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn default_grid_is_32_by_24_cells() {
        assert_eq!(DEFAULT_GRID.columns(), 32);
        assert_eq!(DEFAULT_GRID.rows(), 24);
        assert_eq!(DEFAULT_GRID.total_cells(), 768);
        assert_eq!(DEFAULT_GRID.center(), Position::new(320, 240));
    }

    #[test]
    fn wrap_moves_one_cell_inside_the_field() {
        let moved = wrap(Position::new(320, 240), Direction::Right, DEFAULT_GRID);
        assert_eq!(moved, Position::new(340, 240));

        let moved = wrap(Position::new(320, 240), Direction::Up, DEFAULT_GRID);
        assert_eq!(moved, Position::new(320, 220));
    }

    #[test]
    fn wrap_re_enters_from_opposite_edge() {
        assert_eq!(
            wrap(Position::new(0, 100), Direction::Left, DEFAULT_GRID),
            Position::new(620, 100)
        );
        assert_eq!(
            wrap(Position::new(620, 100), Direction::Right, DEFAULT_GRID),
            Position::new(0, 100)
        );
        assert_eq!(
            wrap(Position::new(40, 0), Direction::Up, DEFAULT_GRID),
            Position::new(40, 460)
        );
        assert_eq!(
            wrap(Position::new(40, 460), Direction::Down, DEFAULT_GRID),
            Position::new(40, 0)
        );
    }

    #[test]
    fn wrap_stays_in_bounds_and_moves_exactly_one_cell_everywhere() {
        let grid = DEFAULT_GRID;
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let start = grid.cell_position(column, row);
                for direction in ALL_DIRECTIONS {
                    let moved = wrap(start, direction, grid);
                    assert!(moved.is_within_bounds(grid));

                    let dx = (moved.x - start.x).rem_euclid(grid.width());
                    let dy = (moved.y - start.y).rem_euclid(grid.height());
                    let (ex, ey) = direction.delta();
                    assert_eq!(dx, (ex * grid.cell()).rem_euclid(grid.width()));
                    assert_eq!(dy, (ey * grid.cell()).rem_euclid(grid.height()));
                }
            }
        }
    }

    #[test]
    fn single_column_grid_wraps_onto_itself() {
        let grid = GridSize {
            width: 20,
            height: 60,
            cell_size: 20,
        };

        assert_eq!(
            Position::new(0, 20).stepped(Direction::Left, grid),
            Position::new(0, 20)
        );
        assert_eq!(
            Position::new(0, 40).stepped(Direction::Down, grid),
            Position::new(0, 0)
        );
    }
}
