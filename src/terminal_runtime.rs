use std::io;
use std::panic;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;
use ratatui::style::Color;

use crate::canvas::{Canvas, CellField};
use crate::config::{BOARD_BACKGROUND_COLOR, DEFAULT_TITLE};
use crate::grid::{GridSize, Position};
use crate::input::{WindowEvent, map_terminal_event};
use crate::renderer;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// The game window: a persistent cell field shown in the terminal.
///
/// Owns terminal lifecycle (raw mode + alternate screen). On drop, this type
/// restores terminal state best-effort.
pub struct TerminalWindow {
    terminal: AppTerminal,
    field: CellField,
    title: String,
}

impl TerminalWindow {
    /// Enters raw mode, switches to alternate screen and allocates a
    /// background-filled field for `grid`.
    pub fn open(grid: GridSize) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                field: CellField::new(grid, BOARD_BACKGROUND_COLOR),
                title: DEFAULT_TITLE.to_owned(),
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }

    /// Sets the terminal window title and the caption on the field border.
    pub fn set_title(&mut self, title: &str) -> io::Result<()> {
        title.clone_into(&mut self.title);
        let mut stdout = io::stdout();
        execute!(stdout, SetTitle(title))
    }

    /// Pushes the current field to the screen.
    pub fn present(&mut self) -> io::Result<()> {
        let field = &self.field;
        let title = self.title.as_str();
        self.terminal
            .draw(|frame| renderer::render(frame, field, title))?;
        Ok(())
    }

    /// Drains every pending terminal event without blocking.
    pub fn poll_events(&mut self) -> io::Result<Vec<WindowEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(mapped) = map_terminal_event(&event::read()?) {
                events.push(mapped);
            }
        }
        Ok(events)
    }
}

impl Canvas for TerminalWindow {
    fn fill_rect(&mut self, position: Position, size: Size, color: Color) {
        self.field.fill_rect(position, size, color);
    }

    fn outline_rect(&mut self, position: Position, size: Size, color: Color) {
        self.field.outline_rect(position, size, color);
    }

    fn clear(&mut self, color: Color) {
        self.field.clear(color);
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}

fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
