//! # Echo Terminal
//!
//! Terminal front end for the Echo companion app.
//!
//! ## Architecture
//!
//! ```text
//! crossterm events ──┐
//! UI ticker ─────────┼──→ TuiRuntime ──→ transition(&TuiState, event)
//! call timer ────────┘        │                    │
//!                             │                    ↓
//!                             │          (TuiState, Vec<TuiCommand>)
//!                             ↓
//!                    draw + execute commands
//! ```
//!
//! All behaviour lives in the pure [`tui::transition`] function and the
//! headless `echo-app` core. The runtime only owns the terminal, the clock
//! and the call timer.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::EchoConfig;
pub use error::{Result, TerminalError};
