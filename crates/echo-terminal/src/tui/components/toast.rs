//! Toast overlay, drawn in the bottom-right corner.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::state::QueuedToast;
use crate::tui::styles::Styles;

/// Draw the toast on screen, if any
pub fn render_toast(f: &mut Frame<'_>, area: Rect, toast: Option<&QueuedToast>, styles: &Styles) {
    let Some(toast) = toast else {
        return;
    };

    let width = area
        .width
        .min(u16::try_from(toast.message.chars().count() + 8).unwrap_or(u16::MAX))
        .min(50);
    let height = 3;
    if area.height < height + 1 || width < 8 {
        return;
    }
    let toast_area = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height - 1,
        width,
        height,
    };

    let style = styles.toast(toast.level);
    let line = Line::from(vec![
        Span::styled(format!("[{}] ", toast.level.icon()), style),
        Span::styled(toast.message.clone(), styles.text()),
    ]);

    f.render_widget(Clear, toast_area);
    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).border_style(style)),
        toast_area,
    );
}
