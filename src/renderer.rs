use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::canvas::{CellField, Paint};
use crate::config::{BOARD_BACKGROUND_COLOR, BORDER_COLOR};

/// Terminal columns per grid cell; keeps cells roughly square.
pub const COLUMNS_PER_CELL: u16 = 2;

/// Solid cell glyph.
pub const GLYPH_CELL: &str = "██";

/// Cell glyph whose gaps show the outline color underneath.
pub const GLYPH_OUTLINED_CELL: &str = "▐▌";

/// Draws the field inside a titled border anchored at the top-left corner.
pub fn render(frame: &mut Frame<'_>, field: &CellField, title: &str) {
    let area = play_area(frame.area(), field);
    let block = Block::bordered()
        .title(format!(" {title} "))
        .border_style(Style::new().fg(BORDER_COLOR).bg(BOARD_BACKGROUND_COLOR));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    render_cells(frame.buffer_mut(), inner, field);
}

/// Area the field occupies including its border, clipped to `available`.
#[must_use]
pub fn play_area(available: Rect, field: &CellField) -> Rect {
    let grid = field.grid();
    let width = grid
        .columns()
        .saturating_mul(COLUMNS_PER_CELL)
        .saturating_add(2);
    let height = grid.rows().saturating_add(2);

    Rect::new(available.x, available.y, width, height).intersection(available)
}

fn render_cells(buffer: &mut Buffer, inner: Rect, field: &CellField) {
    for (column, row, paint) in field.cells() {
        let Some((x, y)) = cell_to_terminal(inner, column, row) else {
            continue;
        };

        let (glyph, style) = cell_style(paint);
        buffer.set_string(x, y, glyph, style);
    }
}

fn cell_style(paint: Paint) -> (&'static str, Style) {
    match paint.outline {
        Some(outline) => (GLYPH_OUTLINED_CELL, Style::new().fg(paint.fill).bg(outline)),
        None => (GLYPH_CELL, Style::new().fg(paint.fill).bg(paint.fill)),
    }
}

fn cell_to_terminal(inner: Rect, column: u16, row: u16) -> Option<(u16, u16)> {
    let x = inner
        .x
        .checked_add(column.checked_mul(COLUMNS_PER_CELL)?)?;
    let y = inner.y.checked_add(row)?;
    if x.saturating_add(COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
