//! Wellness dashboard.

use echo_app::group_thousands;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::state::TuiState;
use crate::tui::styles::Styles;

/// Mood faces from low to high
const MOOD_FACES: [&str; 5] = [":'(", ":(", ":|", ":)", ":D"];

pub(super) fn render(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let wellness = state.app.wellness();
    let weekly_height = u16::try_from(wellness.weekly.len() * 3 + 2).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(weekly_height),
            Constraint::Min(3),
        ])
        .split(area);

    let highlighted = wellness.mood_index();
    let mut faces = vec![Span::styled(
        format!("Mood {:.1}/10   ", wellness.mood_score),
        styles.text(),
    )];
    for (idx, face) in MOOD_FACES.iter().enumerate() {
        let style = if idx == highlighted {
            styles.selected()
        } else {
            styles.text_muted()
        };
        faces.push(Span::styled(format!(" {face} "), style));
        faces.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(faces))
            .block(Block::default().borders(Borders::ALL).title("How are you feeling today?")),
        chunks[0],
    );

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(chunks[1]);
    let cards = [
        ("Sleep", format!("{:.1}h", wellness.sleep_hours)),
        ("Steps", group_thousands(wellness.step_count)),
        ("Heart Rate", format!("{} bpm", wellness.heart_rate)),
        ("Social", wellness.social_interactions.to_string()),
    ];
    for ((label, value), card_area) in cards.iter().zip(card_areas.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(value.clone(), styles.text_highlight())),
            Line::from(Span::styled(*label, styles.text_muted())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(styles.border()));
        f.render_widget(card, *card_area);
    }

    let weekly_block = Block::default().borders(Borders::ALL).title("This Week");
    let weekly_inner = weekly_block.inner(chunks[2]);
    f.render_widget(weekly_block, chunks[2]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); wellness.weekly.len()])
        .split(weekly_inner);
    for (metric, row) in wellness.weekly.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .block(Block::default().title(metric.label.clone()))
            .gauge_style(styles.gauge())
            .percent(metric.percent.min(100));
        f.render_widget(gauge, *row);
    }

    let professional = Paragraph::new(vec![
        Line::from(Span::styled(
            "Connect with a Professional",
            styles.text_highlight(),
        )),
        Line::from(Span::styled(
            "Licensed therapists are available if you need more support.",
            styles.text_muted(),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(professional, chunks[3]);
}
