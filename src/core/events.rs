// Event Handling
// Toolbar event types and translation from terminal input

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::constants::SCROLL_STEP;

/// Events the toolbar reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarEvent {
    /// Quit the application
    Quit,

    /// Activate the tab left of the active one
    Previous,

    /// Activate the tab right of the active one
    Next,

    /// Primary button pressed at a screen cell
    Click { column: u16, row: u16 },

    /// Pointer dragged with the primary button held
    Drag { column: u16, row: u16 },

    /// Primary button released
    Release { column: u16, row: u16 },

    /// Scroll the toolbar content by a number of cells
    ScrollLeft(u16),
    ScrollRight(u16),

    /// Viewport resized
    Resize { width: u16, height: u16 },

    /// No operation
    None,
}

/// Converts terminal events to toolbar events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to a toolbar event
    pub fn handle(event: Event) -> ToolbarEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(width, height) => ToolbarEvent::Resize { width, height },
            _ => ToolbarEvent::None,
        }
    }

    fn handle_key(key: KeyEvent) -> ToolbarEvent {
        // Only handle key press events (ignore repeats and releases)
        if key.kind != KeyEventKind::Press {
            return ToolbarEvent::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => ToolbarEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => ToolbarEvent::Quit,

            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => ToolbarEvent::Previous,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => ToolbarEvent::Next,

            _ => ToolbarEvent::None,
        }
    }

    fn handle_mouse(mouse: MouseEvent) -> ToolbarEvent {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => ToolbarEvent::Click { column, row },
            MouseEventKind::Drag(MouseButton::Left) => ToolbarEvent::Drag { column, row },
            MouseEventKind::Up(MouseButton::Left) => ToolbarEvent::Release { column, row },
            MouseEventKind::ScrollLeft => ToolbarEvent::ScrollLeft(SCROLL_STEP),
            MouseEventKind::ScrollRight => ToolbarEvent::ScrollRight(SCROLL_STEP),
            _ => ToolbarEvent::None,
        }
    }
}
