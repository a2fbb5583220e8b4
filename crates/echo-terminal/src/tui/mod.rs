//! # Terminal UI
//!
//! - [`state`]: pure state machine (`transition`)
//! - [`runtime`]: effect executor and event loop
//! - [`screens`]: one renderer per screen
//! - [`components`]: reusable widgets
//! - [`timer`]: the voice-call tick task

pub mod components;
pub mod events;
pub mod runtime;
pub mod screens;
pub mod state;
pub mod styles;
pub mod timer;

pub use events::TerminalEvent;
pub use runtime::{run_terminal, RuntimeSettings, TuiRuntime};
pub use state::{transition, TuiCommand, TuiState};
pub use styles::{ColorPalette, Styles};
pub use timer::CallTimer;
