//! User preferences shown on the settings screen.

use serde::{Deserialize, Serialize};

/// A toggleable preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preference {
    /// Dark or light palette
    DarkMode,
    /// Notification badge
    Notifications,
    /// Voice call entry points
    VoiceFeatures,
}

impl Preference {
    /// All preferences in display order
    pub fn all() -> &'static [Preference] {
        &[
            Preference::DarkMode,
            Preference::Notifications,
            Preference::VoiceFeatures,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Preference::DarkMode => "Dark Mode",
            Preference::Notifications => "Notifications",
            Preference::VoiceFeatures => "Voice Features",
        }
    }
}

/// Preference values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Dark palette
    pub dark_mode: bool,
    /// Notifications enabled
    pub notifications: bool,
    /// Voice features enabled
    pub voice_features: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            notifications: true,
            voice_features: true,
        }
    }
}

impl Preferences {
    /// Current value of a preference
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::DarkMode => self.dark_mode,
            Preference::Notifications => self.notifications,
            Preference::VoiceFeatures => self.voice_features,
        }
    }

    /// Flip a preference and return the new value
    pub fn toggle(&mut self, pref: Preference) -> bool {
        let slot = match pref {
            Preference::DarkMode => &mut self.dark_mode,
            Preference::Notifications => &mut self.notifications,
            Preference::VoiceFeatures => &mut self.voice_features,
        };
        *slot = !*slot;
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_on() {
        let prefs = Preferences::default();
        assert!(Preference::all().iter().all(|p| prefs.get(*p)));
    }

    #[test]
    fn test_toggle() {
        let mut prefs = Preferences::default();
        assert!(!prefs.toggle(Preference::DarkMode));
        assert!(!prefs.dark_mode);
        assert!(prefs.toggle(Preference::DarkMode));
    }
}
