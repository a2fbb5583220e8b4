//! # TUI Components
//!
//! Reusable widgets shared by the screens.

mod nav_bar;
mod text_input;
mod toast;

pub use nav_bar::render_nav_bar;
pub use text_input::{render_text_input, TextInput};
pub use toast::render_toast;

/// Result of feeding a key to an input component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Key consumed, buffer unchanged
    None,
    /// Key not handled by the component
    Ignored,
    /// Buffer changed
    Edited,
    /// Enter pressed with the given buffer
    Submit(String),
    /// Escape pressed
    Cancel,
}
