//! # Screen Router
//!
//! Screen identifiers and the active-screen router for the companion app.

use serde::{Deserialize, Serialize};

/// Screen identifiers for navigation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Welcome card shown on first launch
    #[default]
    Onboarding,
    /// Three-step profile setup wizard
    Setup,
    /// Dashboard with stats and quick actions
    Home,
    /// Conversation with the companion
    Chat,
    /// Simulated voice call
    Voice,
    /// Activity browser
    Activities,
    /// Wellness dashboard
    Wellness,
    /// Preferences and account
    Settings,
}

impl Screen {
    /// Get the display name for the screen
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Onboarding => "Welcome",
            Screen::Setup => "Setup",
            Screen::Home => "Home",
            Screen::Chat => "Chat",
            Screen::Voice => "Voice Call",
            Screen::Activities => "Activities",
            Screen::Wellness => "Wellness",
            Screen::Settings => "Settings",
        }
    }

    /// Get the icon for the screen
    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Onboarding => "♥",
            Screen::Setup => "✎",
            Screen::Home => "⌂",
            Screen::Chat => "◊",
            Screen::Voice => "☎",
            Screen::Activities => "▦",
            Screen::Wellness => "↗",
            Screen::Settings => "⚙",
        }
    }

    /// Get all screens in declaration order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Onboarding,
            Screen::Setup,
            Screen::Home,
            Screen::Chat,
            Screen::Voice,
            Screen::Activities,
            Screen::Wellness,
            Screen::Settings,
        ]
    }

    /// Screens reachable from the bottom navigation bar, left to right
    pub fn nav_tabs() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::Chat,
            Screen::Activities,
            Screen::Wellness,
            Screen::Settings,
        ]
    }

    /// Whether this screen draws the bottom navigation bar
    pub fn shows_nav_bar(&self) -> bool {
        matches!(
            self,
            Screen::Home | Screen::Activities | Screen::Wellness | Screen::Settings
        )
    }

    /// Get the numeric key (1-5) for this screen's nav tab
    pub fn key_number(&self) -> Option<u8> {
        Self::nav_tabs()
            .iter()
            .position(|s| s == self)
            .map(|idx| idx as u8 + 1)
    }

    /// Get nav tab from numeric key (1-5)
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            1..=5 => Self::nav_tabs().get(usize::from(key) - 1).copied(),
            _ => None,
        }
    }

    /// Get next nav tab. Screens outside the nav bar start at Home.
    pub fn next(&self) -> Screen {
        match self {
            Screen::Home => Screen::Chat,
            Screen::Chat => Screen::Activities,
            Screen::Activities => Screen::Wellness,
            Screen::Wellness => Screen::Settings,
            Screen::Settings => Screen::Home,
            Screen::Onboarding | Screen::Setup | Screen::Voice => Screen::Home,
        }
    }

    /// Get previous nav tab. Screens outside the nav bar start at Home.
    pub fn prev(&self) -> Screen {
        match self {
            Screen::Home => Screen::Settings,
            Screen::Chat => Screen::Home,
            Screen::Activities => Screen::Chat,
            Screen::Wellness => Screen::Activities,
            Screen::Settings => Screen::Wellness,
            Screen::Onboarding | Screen::Setup | Screen::Voice => Screen::Home,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Switch to a screen
    GoTo(Screen),
    /// Next tab on the nav bar
    NextTab,
    /// Previous tab on the nav bar
    PrevTab,
}

/// Holds the active screen. Exactly one screen is active at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Router {
    current: Screen,
}

impl Router {
    /// Router starting at `initial`
    pub fn new(initial: Screen) -> Self {
        Self { current: initial }
    }

    /// Active screen
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Apply a navigation request
    pub fn navigate(&mut self, action: NavAction) {
        self.current = match action {
            NavAction::GoTo(screen) => screen,
            NavAction::NextTab => self.current.next(),
            NavAction::PrevTab => self.current.prev(),
        };
    }

    /// Unconditionally switch to `screen`
    pub fn go_to(&mut self, screen: Screen) {
        self.navigate(NavAction::GoTo(screen));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_starts_at_onboarding() {
        assert_eq!(Router::default().current(), Screen::Onboarding);
    }

    #[test]
    fn test_go_to_is_unconditional() {
        let mut router = Router::new(Screen::Onboarding);
        for screen in Screen::all() {
            router.go_to(*screen);
            assert_eq!(router.current(), *screen);
        }
    }

    #[test]
    fn test_tab_navigation() {
        let mut router = Router::new(Screen::Home);

        router.navigate(NavAction::NextTab);
        assert_eq!(router.current(), Screen::Chat);

        router.navigate(NavAction::NextTab);
        assert_eq!(router.current(), Screen::Activities);

        router.navigate(NavAction::PrevTab);
        assert_eq!(router.current(), Screen::Chat);

        // Wraps from Home to Settings
        let mut wrapped = Router::new(Screen::Home);
        wrapped.navigate(NavAction::PrevTab);
        assert_eq!(wrapped.current(), Screen::Settings);
    }

    #[test]
    fn test_tabs_from_outside_nav_bar_start_at_home() {
        let mut router = Router::new(Screen::Voice);
        router.navigate(NavAction::NextTab);
        assert_eq!(router.current(), Screen::Home);
    }

    #[test]
    fn test_screen_keys() {
        assert_eq!(Screen::Home.key_number(), Some(1));
        assert_eq!(Screen::Settings.key_number(), Some(5));
        assert_eq!(Screen::Voice.key_number(), None);
        assert_eq!(Screen::from_key(3), Some(Screen::Activities));
        assert_eq!(Screen::from_key(0), None);
        assert_eq!(Screen::from_key(6), None);
    }

    #[test]
    fn test_nav_bar_visibility() {
        assert!(Screen::Home.shows_nav_bar());
        assert!(!Screen::Chat.shows_nav_bar());
        assert!(!Screen::Voice.shows_nav_bar());
        assert!(!Screen::Setup.shows_nav_bar());
    }
}
