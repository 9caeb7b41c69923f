use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Snake;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step as `(dx, dy)`, with y growing downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Keys the game distinguishes. Everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// Events produced by the window between two ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WindowEvent {
    Quit,
    KeyDown(Key),
}

/// Whether the loop keeps running after the events were handled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

#[must_use]
pub fn direction_for_key(key: Key) -> Option<Direction> {
    match key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        Key::Other => None,
    }
}

/// Applies one window event to the snake's pending direction.
///
/// Reversals are checked against the direction the snake is currently
/// moving in, not against a direction that is already pending, so two quick
/// presses within one tick cannot turn the snake back onto itself.
pub fn handle_event(snake: &mut Snake, event: WindowEvent) -> Control {
    match event {
        WindowEvent::Quit => Control::Quit,
        WindowEvent::KeyDown(key) => {
            let Some(direction) = direction_for_key(key) else {
                return Control::Continue;
            };
            if direction_change_is_valid(snake.direction(), direction) {
                snake.set_pending_direction(direction);
            }
            Control::Continue
        }
    }
}

/// Drains a batch of events, stopping at the first quit request.
pub fn handle_events<I>(snake: &mut Snake, events: I) -> Control
where
    I: IntoIterator<Item = WindowEvent>,
{
    for event in events {
        if handle_event(snake, event) == Control::Quit {
            return Control::Quit;
        }
    }
    Control::Continue
}

/// Maps a raw terminal event onto a window event.
///
/// Arrow keys and WASD steer; `Esc`, `q` and `Ctrl+C` quit. Key releases and
/// non-key events are dropped.
#[must_use]
pub fn map_terminal_event(event: &Event) -> Option<WindowEvent> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return None;
    };

    if *kind == KeyEventKind::Release {
        return None;
    }

    let mapped = match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => WindowEvent::Quit,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => WindowEvent::Quit,
        KeyCode::Up | KeyCode::Char('w' | 'W') => WindowEvent::KeyDown(Key::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => WindowEvent::KeyDown(Key::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => WindowEvent::KeyDown(Key::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => WindowEvent::KeyDown(Key::Right),
        _ => WindowEvent::KeyDown(Key::Other),
    };

    Some(mapped)
}
