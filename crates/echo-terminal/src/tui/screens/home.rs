//! Dashboard: greeting, stats, quick actions and recommended activities.

use echo_app::Screen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::tui::state::TuiState;
use crate::tui::styles::Styles;

/// Activities shown on the dashboard
const RECOMMENDED: usize = 3;

pub(super) fn render(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let profile = state.app.profile();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(3),
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Hi {}, good to see you!", profile.name),
            styles.text_highlight(),
        )),
        Line::from(Span::styled(
            format!("{} day streak · keep it going", profile.streak),
            styles.text_warning(),
        )),
    ]);
    f.render_widget(greeting, chunks[0]);

    let stat_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);
    let stats = [
        ("Talk Time", format!("{} min", profile.conversation_minutes)),
        ("Activities", profile.activities_completed.to_string()),
        ("Mood", format!("{:.1}/10", state.app.wellness().mood_score)),
    ];
    for ((label, value), stat_area) in stats.iter().zip(stat_areas.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(value.clone(), styles.text_highlight())),
            Line::from(Span::styled(*label, styles.text_muted())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(styles.border()));
        f.render_widget(card, *stat_area);
    }

    let actions: Vec<ListItem<'_>> = [
        ("c", "Chat with Echo"),
        ("v", "Voice Call"),
        ("a", "Find Activities"),
        ("w", "Wellness Check"),
    ]
    .iter()
    .map(|(key, label)| {
        ListItem::new(Line::from(vec![
            Span::styled(format!("[{key}] "), styles.text_highlight()),
            Span::styled(*label, styles.text()),
        ]))
    })
    .collect();
    f.render_widget(
        List::new(actions).block(Block::default().borders(Borders::ALL).title("Quick Actions")),
        chunks[2],
    );

    let recommended: Vec<ListItem<'_>> = state
        .app
        .activities()
        .recommended(RECOMMENDED)
        .iter()
        .map(|activity| {
            ListItem::new(vec![
                Line::from(Span::styled(activity.title.clone(), styles.text())),
                Line::from(Span::styled(
                    format!(
                        "  {} · {} · {} going",
                        activity.location, activity.time, activity.attendees
                    ),
                    styles.text_muted(),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(recommended)
            .block(Block::default().borders(Borders::ALL).title("Recommended for You")),
        chunks[3],
    );

    if state.home.menu_open {
        render_menu(f, centered_rect(40, 60, area), styles);
    }
}

fn render_menu(f: &mut Frame<'_>, area: Rect, styles: &Styles) {
    let items: Vec<ListItem<'_>> = Screen::nav_tabs()
        .iter()
        .map(|screen| {
            let key = screen.key_number().unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{key}  "), styles.text_highlight()),
                Span::styled(format!("{} {}", screen.icon(), screen.name()), styles.text()),
            ]))
        })
        .collect();
    f.render_widget(Clear, area);
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border_focused())
                .title("Menu (Esc to close)"),
        ),
        area,
    );
}
