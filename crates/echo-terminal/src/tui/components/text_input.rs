//! # Text Input Component
//!
//! Single-line editable field used for the chat composer, the setup name field
//! and the activity search box. Supports cursor movement, readline-style kills
//! and recall of previously submitted lines.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::InputAction;
use crate::tui::styles::Styles;

const MAX_HISTORY: usize = 100;

/// Editable single-line text buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    /// Cursor position in chars
    cursor: usize,
    history: Vec<String>,
    history_pos: Option<usize>,
    saved_buffer: Option<String>,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the buffer and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.char_len();
    }

    /// Clear the buffer and leave history navigation
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_pos = None;
        self.saved_buffer = None;
    }

    /// Clear the buffer after a successful submit and remember the line
    pub fn commit(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        self.clear();
        if !text.is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }
        text
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    fn delete_char_at(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    fn char_before_cursor(&self) -> Option<char> {
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.buffer.chars().nth(idx))
    }

    /// Ctrl+W
    fn delete_word_before(&mut self) {
        while self.char_before_cursor() == Some(' ') {
            self.delete_char_before();
        }
        while matches!(self.char_before_cursor(), Some(c) if c != ' ') {
            self.delete_char_before();
        }
    }

    fn kill_to_start(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.buffer.replace_range(..at, "");
        self.cursor = 0;
    }

    fn kill_to_end(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.buffer.truncate(at);
    }

    fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let pos = match self.history_pos {
            None => {
                self.saved_buffer = Some(self.buffer.clone());
                self.history.len() - 1
            }
            Some(pos) if pos > 0 => pos - 1,
            Some(_) => return,
        };
        self.history_pos = Some(pos);
        self.set_text(self.history[pos].clone());
    }

    fn history_down(&mut self) {
        match self.history_pos {
            Some(pos) if pos + 1 < self.history.len() => {
                self.history_pos = Some(pos + 1);
                self.set_text(self.history[pos + 1].clone());
            }
            Some(_) => {
                self.history_pos = None;
                let saved = self.saved_buffer.take().unwrap_or_default();
                self.set_text(saved);
            }
            None => {}
        }
    }

    /// Apply a key press.
    ///
    /// Enter yields [`InputAction::Submit`] without clearing; the caller decides
    /// whether the line was accepted and calls [`commit`](Self::commit).
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('w') => {
                    self.delete_word_before();
                    InputAction::Edited
                }
                KeyCode::Char('u') => {
                    self.kill_to_start();
                    InputAction::Edited
                }
                KeyCode::Char('k') => {
                    self.kill_to_end();
                    InputAction::Edited
                }
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    InputAction::None
                }
                KeyCode::Char('e') => {
                    self.cursor = self.char_len();
                    InputAction::None
                }
                _ => InputAction::Ignored,
            };
        }

        match key.code {
            KeyCode::Enter => InputAction::Submit(self.buffer.clone()),
            KeyCode::Esc => InputAction::Cancel,
            KeyCode::Char(c) => {
                self.insert_char(c);
                InputAction::Edited
            }
            KeyCode::Backspace => {
                self.delete_char_before();
                InputAction::Edited
            }
            KeyCode::Delete => {
                self.delete_char_at();
                InputAction::Edited
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                InputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputAction::None
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                InputAction::None
            }
            KeyCode::Up => {
                self.history_up();
                InputAction::Edited
            }
            KeyCode::Down => {
                self.history_down();
                InputAction::Edited
            }
            _ => InputAction::Ignored,
        }
    }
}

/// Draw a bordered input with a block cursor when focused
pub fn render_text_input(
    f: &mut Frame<'_>,
    area: Rect,
    input: &TextInput,
    title: &str,
    placeholder: &str,
    focused: bool,
    styles: &Styles,
) {
    let border_style = if focused {
        styles.border_focused()
    } else {
        styles.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string());

    let line = if input.is_empty() && !focused {
        Line::from(Span::styled(placeholder.to_string(), styles.text_muted()))
    } else if focused {
        let chars: Vec<char> = input.text().chars().collect();
        let cursor = input.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let under = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
        let after: String = chars.get(cursor + 1..).map(|s| s.iter().collect()).unwrap_or_default();
        Line::from(vec![
            Span::styled(before, styles.text()),
            Span::styled(under, styles.text().add_modifier(Modifier::REVERSED)),
            Span::styled(after, styles.text()),
        ])
    } else {
        Line::from(Span::styled(input.text().to_string(), styles.text()))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
