//! TUI command types
//!
//! Side effects produced by state transitions and executed by the runtime.

use echo_app::CallGeneration;

use super::toast::ToastLevel;

/// Command representing a side effect
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TuiCommand {
    /// Exit the TUI
    Exit,

    /// Show a toast notification
    ShowToast {
        /// Text
        message: String,
        /// Severity
        level: ToastLevel,
    },

    /// Start (or restart) the call timer for a call
    StartCallTimer {
        /// Call the ticks belong to
        generation: CallGeneration,
    },

    /// Cancel the call timer
    StopCallTimer,
}

impl TuiCommand {
    /// Info toast
    pub fn info(message: impl Into<String>) -> Self {
        Self::ShowToast {
            message: message.into(),
            level: ToastLevel::Info,
        }
    }

    /// Success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self::ShowToast {
            message: message.into(),
            level: ToastLevel::Success,
        }
    }
}
