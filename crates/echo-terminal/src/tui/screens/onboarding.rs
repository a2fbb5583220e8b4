//! Welcome card.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::tui::state::TuiState;
use crate::tui::styles::Styles;

pub(super) fn render(f: &mut Frame<'_>, area: Rect, _state: &TuiState, styles: &Styles) {
    let card = centered_rect(70, 80, area);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("♥  Echo", styles.text_highlight())),
        Line::from(""),
        Line::from(Span::styled(
            "Your AI companion for meaningful connection",
            styles.text(),
        )),
        Line::from(""),
        Line::from(Span::styled("◊  Talk anytime, about anything", styles.text_muted())),
        Line::from(Span::styled("▦  Discover activities near you", styles.text_muted())),
        Line::from(Span::styled("↗  Track how you are feeling", styles.text_muted())),
        Line::from(""),
        Line::from(Span::styled("[ Enter ]  Get Started", styles.selected())),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border_focused())
                .title("Welcome"),
        );
    f.render_widget(widget, card);
}
