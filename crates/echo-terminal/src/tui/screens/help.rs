//! Key binding overlay.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::Styles;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("? / F1", "Toggle help"),
            ("q", "Quit (outside text fields)"),
            ("Ctrl+C", "Quit"),
            ("1-5, Tab", "Switch tab (Home, Activities, Wellness, Settings)"),
        ],
    ),
    (
        "Setup",
        &[
            ("Enter", "Continue / Complete Setup"),
            ("↑/↓, Space", "Move and toggle an option"),
            ("Esc", "Back"),
        ],
    ),
    (
        "Chat",
        &[
            ("Enter", "Send message"),
            ("Ctrl+P", "Start voice call"),
            ("Ctrl+L", "Toggle microphone"),
            ("Ctrl+W/U/K", "Delete word / to start / to end"),
        ],
    ),
    ("Voice", &[("m", "Mute"), ("e / Esc", "End call")]),
    (
        "Activities",
        &[("←/→", "Category"), ("/", "Search"), ("↑/↓", "Select")],
    ),
];

pub(super) fn render(f: &mut Frame<'_>, area: Rect, styles: &Styles) {
    let mut lines = Vec::new();
    for (section, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(*section, styles.text_highlight())));
        for (keys, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<12}"), styles.text()),
                Span::styled(*action, styles.text_muted()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        styles.text_muted(),
    )));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.border_focused())
                    .title("Help"),
            ),
        area,
    );
}
