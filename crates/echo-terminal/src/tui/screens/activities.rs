//! Activity browser with category chips and search.

use echo_app::CategoryFilter;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::tui::components::render_text_input;
use crate::tui::state::TuiState;
use crate::tui::styles::Styles;

pub(super) fn render(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let view = &state.activities;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    render_text_input(
        f,
        chunks[0],
        &view.search,
        "Search",
        "Press / to search activities",
        view.searching,
        styles,
    );

    let chips = CategoryFilter::chips();
    let selected_chip = chips
        .iter()
        .position(|chip| *chip == view.filter.category)
        .unwrap_or(0);
    let tabs = Tabs::new(chips.iter().map(|chip| chip.label()).collect::<Vec<_>>())
        .block(Block::default().borders(Borders::ALL).title("Category"))
        .style(styles.text_muted())
        .highlight_style(styles.selected())
        .select(selected_chip);
    f.render_widget(tabs, chunks[1]);

    let matches: Vec<_> = state.app.activities().filtered(&view.filter).collect();
    let title = format!("{} activities", matches.len());

    if matches.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No activities match. Try another category or search.",
            styles.text_muted(),
        )))
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, chunks[2]);
        return;
    }

    let items: Vec<ListItem<'_>> = matches
        .iter()
        .map(|activity| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(activity.title.clone(), styles.text()),
                    Span::styled(
                        format!("  [{}]", activity.category.label()),
                        styles.text_muted(),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {} · {}", activity.location, activity.time),
                    styles.text_muted(),
                )),
                Line::from(Span::styled(
                    format!("  {} people going", activity.attendees),
                    styles.text_success(),
                )),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(view.selected.min(matches.len() - 1)));
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(styles.selected())
        .highlight_symbol("› ");
    f.render_stateful_widget(list, chunks[2], &mut list_state);
}
