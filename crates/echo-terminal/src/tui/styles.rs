//! # TUI Theming and Styles
//!
//! Color palette and reusable styles. The dark-mode preference picks the palette
//! on every frame, so toggling it in settings takes effect immediately.

use ratatui::style::{Color, Modifier, Style};

use crate::tui::state::ToastLevel;

/// Color palette for the Echo TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    /// Brand color for highlights and active elements
    pub primary: Color,
    /// Accent for the companion's messages
    pub secondary: Color,
    /// Positive state
    pub success: Color,
    /// Warning state
    pub warning: Color,
    /// Error / crisis notice
    pub error: Color,
    /// Informational text
    pub info: Color,
    /// Main background
    pub background: Color,
    /// Elevated background (status bar, nav bar)
    pub surface: Color,
    /// Primary text
    pub text_primary: Color,
    /// Muted text
    pub text_secondary: Color,
    /// Border
    pub border: Color,
    /// Border when focused
    pub border_focused: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Dark palette (default)
    pub const fn dark() -> Self {
        Self {
            primary: Color::Magenta,
            secondary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::LightBlue,
            background: Color::Reset,
            surface: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Magenta,
        }
    }

    /// Light palette
    pub const fn light() -> Self {
        Self {
            primary: Color::Magenta,
            secondary: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            background: Color::White,
            surface: Color::Gray,
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Magenta,
        }
    }
}

/// Reusable style definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Color palette
    pub palette: ColorPalette,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(ColorPalette::default())
    }
}

impl Styles {
    /// Create styles with the given palette
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Styles for the dark-mode preference
    pub const fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            Self::new(ColorPalette::dark())
        } else {
            Self::new(ColorPalette::light())
        }
    }

    /// Frame background
    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary)
            .bg(self.palette.background)
    }

    /// Normal text
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    /// Muted text
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    /// Highlighted text
    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Success text
    pub fn text_success(&self) -> Style {
        Style::default().fg(self.palette.success)
    }

    /// Warning text
    pub fn text_warning(&self) -> Style {
        Style::default().fg(self.palette.warning)
    }

    /// Error text
    pub fn text_error(&self) -> Style {
        Style::default().fg(self.palette.error)
    }

    /// Normal border
    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    /// Focused border
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.palette.border_focused)
    }

    /// Status and nav bar background
    pub fn status_bar(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary)
            .bg(self.palette.surface)
    }

    /// Selected list row, chip or nav tab
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// User message
    pub fn user_message(&self) -> Style {
        Style::default().fg(self.palette.primary)
    }

    /// Companion message
    pub fn companion_message(&self) -> Style {
        Style::default().fg(self.palette.secondary)
    }

    /// Progress gauge
    pub fn gauge(&self) -> Style {
        Style::default().fg(self.palette.primary)
    }

    /// Toast by level
    pub fn toast(&self, level: ToastLevel) -> Style {
        let color = match level {
            ToastLevel::Info => self.palette.info,
            ToastLevel::Success => self.palette.success,
            ToastLevel::Warning => self.palette.warning,
            ToastLevel::Error => self.palette.error,
        };
        Style::default().fg(color)
    }
}
