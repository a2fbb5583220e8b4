//! Conversation with the companion.

use echo_app::Sender;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::components::render_text_input;
use crate::tui::state::TuiState;
use crate::tui::styles::Styles;

/// Static prompt suggestions under the log
const SUGGESTIONS: [&str; 3] = [
    "I'm feeling anxious",
    "Suggest an activity",
    "Tell me something positive",
];

pub(super) fn render(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let mut lines = Vec::new();
    for message in state.app.conversation().messages() {
        let (who, style) = match message.sender {
            Sender::User => ("You", styles.user_message()),
            Sender::Companion => ("Echo", styles.companion_message()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{who} "), style),
            Span::styled(message.time.clone(), styles.text_muted()),
        ]));
        lines.push(Line::from(Span::styled(message.text.clone(), styles.text())));
        lines.push(Line::from(""));
    }

    // Keep the newest messages in view
    let inner_height = chunks[0].height.saturating_sub(2);
    let scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height);
    let log = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Echo · Online"),
        );
    f.render_widget(log, chunks[0]);

    let suggestions: Vec<Span<'_>> = SUGGESTIONS
        .iter()
        .flat_map(|s| {
            [
                Span::styled(format!(" {s} "), styles.status_bar()),
                Span::raw(" "),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(suggestions)), chunks[1]);

    f.render_widget(
        Paragraph::new(Span::styled(
            "In crisis? Call or text 988 (Suicide & Crisis Lifeline)",
            styles.text_error(),
        )),
        chunks[2],
    );

    let title = if state.chat.listening {
        "Message · ● listening"
    } else {
        "Message"
    };
    render_text_input(
        f,
        chunks[3],
        &state.chat.input,
        title,
        "Type a message...",
        true,
        styles,
    );
}
