//! View state for each screen.
//!
//! Screen-local UI state that the headless core does not model: input buffers,
//! list cursors and overlay flags.

use echo_app::{ActivityFilter, Preference};

use crate::tui::components::TextInput;

/// Setup screen state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupViewState {
    /// Name field on step 1
    pub name_input: TextInput,
    /// Highlighted option on steps 2 and 3
    pub option_cursor: usize,
}

/// Chat screen state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatViewState {
    /// Message composer
    pub input: TextInput,
    /// Cosmetic microphone toggle
    pub listening: bool,
}

/// Home screen state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeViewState {
    /// Menu overlay visible
    pub menu_open: bool,
}

/// Activity browser state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitiesViewState {
    /// Category chip and search text
    pub filter: ActivityFilter,
    /// Search box
    pub search: TextInput,
    /// Whether keys go to the search box
    pub searching: bool,
    /// Highlighted row in the filtered list
    pub selected: usize,
}

/// A row on the settings screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsRow {
    /// A boolean preference
    Toggle(Preference),
    /// Return to onboarding
    LogOut,
}

impl SettingsRow {
    /// Rows in display order
    pub fn all() -> Vec<SettingsRow> {
        Preference::all()
            .iter()
            .copied()
            .map(SettingsRow::Toggle)
            .chain(std::iter::once(SettingsRow::LogOut))
            .collect()
    }

    /// Row label
    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::Toggle(pref) => pref.label(),
            SettingsRow::LogOut => "Log Out",
        }
    }
}

/// Settings screen state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsViewState {
    /// Highlighted row
    pub selected: usize,
}

impl SettingsViewState {
    /// Row under the cursor
    pub fn selected_row(&self) -> Option<SettingsRow> {
        SettingsRow::all().get(self.selected).copied()
    }
}
