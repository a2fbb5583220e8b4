//! # Screens
//!
//! One renderer per [`Screen`]. [`render`] draws the shared chrome (header,
//! status line, nav bar, toasts, help overlay) and dispatches to the active
//! screen's body.

mod activities;
mod chat;
mod help;
mod home;
mod onboarding;
mod settings;
mod setup;
mod voice;
mod wellness;

use echo_app::Screen;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::tui::components::{render_nav_bar, render_toast};
use crate::tui::state::TuiState;
use crate::tui::styles::Styles;

/// Draw the whole UI for `state`
pub fn render(f: &mut Frame<'_>, state: &TuiState) {
    let styles = Styles::for_theme(state.app.preferences().dark_mode);
    let screen = state.screen();
    let area = f.size();

    f.render_widget(Block::default().style(styles.base()), area);

    let nav_height = if screen.shows_nav_bar() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(nav_height),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, chunks[0], state, &styles);

    match screen {
        Screen::Onboarding => onboarding::render(f, chunks[1], state, &styles),
        Screen::Setup => setup::render(f, chunks[1], state, &styles),
        Screen::Home => home::render(f, chunks[1], state, &styles),
        Screen::Chat => chat::render(f, chunks[1], state, &styles),
        Screen::Voice => voice::render(f, chunks[1], state, &styles),
        Screen::Activities => activities::render(f, chunks[1], state, &styles),
        Screen::Wellness => wellness::render(f, chunks[1], state, &styles),
        Screen::Settings => settings::render(f, chunks[1], state, &styles),
    }

    if screen.shows_nav_bar() {
        render_nav_bar(f, chunks[2], screen, &styles);
    }
    render_status_line(f, chunks[3], state, &styles);
    render_toast(f, chunks[1], state.toast_queue.current(), &styles);

    if state.show_help {
        help::render(f, centered_rect(70, 80, area), &styles);
    }
}

fn render_header(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let screen = state.screen();
    let mut spans = vec![
        Span::styled(" ♥ Echo ", styles.text_highlight()),
        Span::styled("│ ", styles.text_muted()),
        Span::styled(format!("{} {}", screen.icon(), screen.name()), styles.text()),
    ];
    if state.app.preferences().notifications && screen.shows_nav_bar() {
        spans.push(Span::styled("  ● 1 new", styles.text_warning()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let hints = match state.screen() {
        Screen::Onboarding => "Enter: Get Started",
        Screen::Setup => "Enter: Continue │ Esc: Back",
        Screen::Home => "c: Chat │ v: Voice │ a: Activities │ w: Wellness │ m: Menu",
        Screen::Chat => "Enter: Send │ Ctrl+P: Voice │ Ctrl+L: Mic │ Esc: Home",
        Screen::Voice => "m: Mute │ e: End Call",
        Screen::Activities => "←/→: Category │ ↑/↓: Select │ /: Search │ Esc: Back",
        Screen::Wellness => "Esc: Home",
        Screen::Settings => "↑/↓: Select │ Enter: Toggle │ Esc: Home",
    };
    let quit = if state.is_typing() {
        " │ F1: Help │ Ctrl+C: Quit"
    } else {
        " │ ?: Help │ q: Quit"
    };
    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(hints),
        Span::raw(quit),
    ]);
    f.render_widget(Paragraph::new(line).style(styles.status_bar()), area);
}

/// Rect of `percent_x` × `percent_y` centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
