//! # Terminal Events
//!
//! Inputs to the TUI state machine: key presses, UI ticks, call-timer ticks and resizes.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use echo_app::CallGeneration;

/// Event consumed by [`transition`](crate::tui::state::transition)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press
    Key(KeyEvent),
    /// UI tick, ages toasts
    Tick,
    /// One second of call time for the given call
    CallTick {
        /// Call the tick belongs to
        generation: CallGeneration,
    },
    /// Terminal resized
    Resize {
        /// Columns
        width: u16,
        /// Rows
        height: u16,
    },
}

impl TerminalEvent {
    /// Convert a crossterm event. Key releases and mouse/focus events are dropped.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

/// Constructors for synthetic events, used by tests and scripted input.
pub mod events {
    use super::*;

    /// Key press with modifiers
    pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent::new(code, modifiers))
    }

    /// Plain key press
    pub fn key(code: KeyCode) -> TerminalEvent {
        key_with(code, KeyModifiers::NONE)
    }

    /// Character key
    pub fn char(c: char) -> TerminalEvent {
        key(KeyCode::Char(c))
    }

    /// Ctrl + character
    pub fn ctrl(c: char) -> TerminalEvent {
        key_with(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Enter
    pub fn enter() -> TerminalEvent {
        key(KeyCode::Enter)
    }

    /// Escape
    pub fn escape() -> TerminalEvent {
        key(KeyCode::Esc)
    }

    /// Tab
    pub fn tab() -> TerminalEvent {
        key(KeyCode::Tab)
    }

    /// Shift+Tab
    pub fn back_tab() -> TerminalEvent {
        key_with(KeyCode::BackTab, KeyModifiers::SHIFT)
    }

    /// Backspace
    pub fn backspace() -> TerminalEvent {
        key(KeyCode::Backspace)
    }

    /// Arrow up
    pub fn up() -> TerminalEvent {
        key(KeyCode::Up)
    }

    /// Arrow down
    pub fn down() -> TerminalEvent {
        key(KeyCode::Down)
    }

    /// Arrow left
    pub fn left() -> TerminalEvent {
        key(KeyCode::Left)
    }

    /// Arrow right
    pub fn right() -> TerminalEvent {
        key(KeyCode::Right)
    }

    /// One character event per char of `text`
    pub fn text(text: &str) -> Vec<TerminalEvent> {
        text.chars().map(char).collect()
    }
}
