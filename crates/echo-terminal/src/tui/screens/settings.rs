//! Preferences and account.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::state::{SettingsRow, TuiState};
use crate::tui::styles::Styles;

pub(super) fn render(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let profile = state.app.profile();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let card = Paragraph::new(vec![
        Line::from(Span::styled(profile.name.clone(), styles.text_highlight())),
        Line::from(Span::styled(
            format!(
                "{} day streak · {} activities joined",
                profile.streak, profile.activities_completed
            ),
            styles.text_muted(),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title("Profile"));
    f.render_widget(card, chunks[0]);

    let preferences = state.app.preferences();
    let items: Vec<ListItem<'_>> = SettingsRow::all()
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let style = if idx == state.settings.selected {
                styles.selected()
            } else {
                styles.text()
            };
            let line = match row {
                SettingsRow::Toggle(pref) => {
                    let value = if preferences.get(pref) { "[ON] " } else { "[OFF]" };
                    Line::from(vec![
                        Span::styled(format!("{value} "), style),
                        Span::styled(row.label(), style),
                    ])
                }
                SettingsRow::LogOut => Line::from(Span::styled(
                    format!("      {}", row.label()),
                    if idx == state.settings.selected {
                        style
                    } else {
                        styles.text_error()
                    },
                )),
            };
            ListItem::new(line)
        })
        .collect();

    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Preferences")),
        chunks[1],
    );
}
