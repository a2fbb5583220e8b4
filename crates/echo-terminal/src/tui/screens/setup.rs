//! Three-step setup wizard.

use echo_app::SetupStep;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::components::render_text_input;
use crate::tui::state::TuiState;
use crate::tui::styles::Styles;

pub(super) fn render(f: &mut Frame<'_>, area: Rect, state: &TuiState, styles: &Styles) {
    let Some(wizard) = state.app.setup() else {
        return;
    };
    let step = wizard.step();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Profile Setup"))
        .gauge_style(styles.gauge())
        .percent(wizard.progress_percent())
        .label(format!(
            "Step {} of {}",
            step.number(),
            SetupStep::total_steps()
        ));
    f.render_widget(gauge, chunks[0]);

    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(step.prompt(), styles.text_highlight())),
        Line::from(Span::styled(step.hint(), styles.text_muted())),
    ]);
    f.render_widget(prompt, chunks[1]);

    match step {
        SetupStep::Name => {
            let input_area = Rect {
                height: chunks[2].height.min(3),
                ..chunks[2]
            };
            render_text_input(
                f,
                input_area,
                &state.setup.name_input,
                "Your name",
                "Enter your name",
                true,
                styles,
            );
        }
        SetupStep::Interests | SetupStep::Goals => {
            let items: Vec<ListItem<'_>> = step
                .options()
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    let selected = wizard.draft().is_selected(step, option);
                    let mark = if selected { "[x]" } else { "[ ]" };
                    let style = if idx == state.setup.option_cursor {
                        styles.selected()
                    } else if selected {
                        styles.text_highlight()
                    } else {
                        styles.text()
                    };
                    ListItem::new(Line::from(Span::styled(format!("{mark} {option}"), style)))
                })
                .collect();
            let count = match step {
                SetupStep::Interests => wizard.draft().interests.len(),
                _ => wizard.draft().goals.len(),
            };
            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{count} selected")),
            );
            f.render_widget(list, chunks[2]);
        }
    }

    let (label, enabled) = if step.is_last() {
        ("Complete Setup", wizard.can_complete())
    } else {
        ("Continue", wizard.can_advance())
    };
    let button_style = if enabled {
        styles.selected()
    } else {
        styles.text_muted()
    };
    let mut spans = vec![Span::styled(format!("[ Enter ] {label}"), button_style)];
    if !step.is_first() {
        spans.push(Span::styled("   [ Esc ] Back", styles.text_muted()));
    }
    if step.is_last() && !wizard.can_complete() {
        spans.push(Span::styled(
            "   pick at least one interest",
            styles.text_warning(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[3]);
}
