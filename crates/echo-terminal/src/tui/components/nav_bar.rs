//! Bottom navigation bar.

use echo_app::Screen;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::styles::Styles;

/// Draw the five nav tabs with the active one highlighted
pub fn render_nav_bar(f: &mut Frame<'_>, area: Rect, active: Screen, styles: &Styles) {
    let tabs = Screen::nav_tabs();
    let titles: Vec<Line<'_>> = tabs
        .iter()
        .map(|screen| {
            let key = screen.key_number().unwrap_or_default();
            Line::from(format!("{key} {} {}", screen.icon(), screen.name()))
        })
        .collect();

    let widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border()),
        )
        .style(styles.text_muted())
        .highlight_style(styles.selected())
        .select(tabs.iter().position(|s| *s == active).unwrap_or(0))
        .divider("|");

    f.render_widget(widget, area);
}
