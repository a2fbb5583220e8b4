//! Simulated voice call.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::tui::state::TuiState;
use crate::tui::styles::Styles;

pub(super) fn render(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let Some(call) = state.app.call() else {
        return;
    };

    let status = if call.is_active() {
        Span::styled("Connected", styles.text_success())
    } else {
        Span::styled("Call ended", styles.text_muted())
    };
    let mute = if call.is_muted() {
        Span::styled("[m] Unmute  (muted)", styles.text_warning())
    } else {
        Span::styled("[m] Mute", styles.text())
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("☎  Echo", styles.text_highlight())),
        Line::from(status),
        Line::from(""),
        Line::from(Span::styled(call.display(), styles.text_highlight())),
        Line::from(""),
        Line::from(Span::styled(
            "Echo is listening. Take your time.",
            styles.text_muted(),
        )),
        Line::from(""),
        Line::from(vec![
            mute,
            Span::raw("     "),
            Span::styled("[e] End Call", styles.text_error()),
        ]),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border_focused())
            .title("Voice Call"),
    );
    f.render_widget(widget, centered_rect(70, 80, area));
}
