//! Shared helpers for the integration tests.

use echo_app::Screen;
use echo_terminal::tui::events::{events, TerminalEvent};
use echo_terminal::tui::{transition, TuiCommand, TuiState};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Wraps the pure state machine and records every emitted command
pub struct TestTui {
    pub state: TuiState,
    pub commands: Vec<TuiCommand>,
}

impl TestTui {
    pub fn new() -> Self {
        Self::with_state(TuiState::new())
    }

    pub fn with_state(state: TuiState) -> Self {
        Self {
            state,
            commands: Vec::new(),
        }
    }

    /// Fresh state already past setup, on the home screen
    pub fn at_home() -> Self {
        let mut tui = Self::new();
        tui.state.app.go_to(Screen::Home);
        tui
    }

    pub fn send(&mut self, event: TerminalEvent) {
        let (next, cmds) = transition(&self.state, event);
        self.state = next;
        self.commands.extend(cmds);
    }

    pub fn send_char(&mut self, c: char) {
        self.send(events::char(c));
    }

    pub fn send_text(&mut self, text: &str) {
        for event in events::text(text) {
            self.send(event);
        }
    }

    pub fn send_enter(&mut self) {
        self.send(events::enter());
    }

    pub fn send_escape(&mut self) {
        self.send(events::escape());
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn assert_screen(&self, expected: Screen) {
        assert_eq!(
            self.screen(),
            expected,
            "expected {expected:?}, got {:?}",
            self.screen()
        );
    }

    pub fn take_commands(&mut self) -> Vec<TuiCommand> {
        std::mem::take(&mut self.commands)
    }
}

/// Render `state` into an in-memory terminal and return its rows
pub fn render_rows(state: &TuiState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| echo_terminal::tui::screens::render(f, state))
        .unwrap();
    buffer_rows(terminal.backend().buffer())
}

pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}
