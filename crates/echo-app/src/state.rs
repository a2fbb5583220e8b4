//! # Application State
//!
//! The single view-state container: active screen, display records, and the
//! screen-local state (setup wizard, voice call) whose lifetime follows the router.
//!
//! Screen-local state is created when its screen is entered and dropped when the
//! screen is left, so a fresh visit always starts from step 1 or 00:00.

use crate::call::{CallGeneration, CallSession};
use crate::catalog::{ActivityCatalog, Profile, SeedData, WellnessSnapshot};
use crate::conversation::{ConversationLog, MessageId};
use crate::preferences::{Preference, Preferences};
use crate::router::{NavAction, Router, Screen};
use crate::wizard::{SetupOutcome, SetupWizard};

/// A completed screen change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Screen that was left
    pub from: Screen,
    /// Screen that is now active
    pub to: Screen,
}

/// Process-wide view state
#[derive(Clone, Debug)]
pub struct AppState {
    router: Router,
    profile: Profile,
    conversation: ConversationLog,
    activities: ActivityCatalog,
    wellness: WellnessSnapshot,
    preferences: Preferences,
    setup: Option<SetupWizard>,
    call: Option<CallSession>,
    last_call_generation: CallGeneration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State seeded with the demo data, starting at onboarding
    pub fn new() -> Self {
        Self::from_seed(SeedData::default())
    }

    /// State seeded with custom data, starting at onboarding
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            router: Router::new(Screen::Onboarding),
            profile: seed.profile,
            conversation: ConversationLog::seeded(seed.conversation),
            activities: ActivityCatalog::new(seed.activities),
            wellness: seed.wellness,
            preferences: Preferences::default(),
            setup: None,
            call: None,
            last_call_generation: 0,
        }
    }

    /// Replace the initial preferences
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Active screen
    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    /// Go to a screen unconditionally
    pub fn go_to(&mut self, screen: Screen) -> Option<Transition> {
        self.navigate(NavAction::GoTo(screen))
    }

    /// Apply a navigation action, running leave/enter hooks on change.
    pub fn navigate(&mut self, action: NavAction) -> Option<Transition> {
        let from = self.router.current();
        self.router.navigate(action);
        let to = self.router.current();
        if from == to {
            return None;
        }
        self.on_leave(from);
        self.on_enter(to);
        tracing::debug!(?from, ?to, "screen transition");
        Some(Transition { from, to })
    }

    fn on_leave(&mut self, screen: Screen) {
        match screen {
            Screen::Setup => self.setup = None,
            Screen::Voice => {
                if let Some(mut call) = self.call.take() {
                    call.end();
                    tracing::debug!(
                        generation = call.generation(),
                        elapsed = call.elapsed_secs(),
                        "call ended"
                    );
                }
            }
            _ => {}
        }
    }

    fn on_enter(&mut self, screen: Screen) {
        match screen {
            Screen::Setup => self.setup = Some(SetupWizard::new()),
            Screen::Voice => {
                self.last_call_generation += 1;
                self.call = Some(CallSession::start(self.last_call_generation));
            }
            _ => {}
        }
    }

    /// Profile record
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Conversation log
    pub fn conversation(&self) -> &ConversationLog {
        &self.conversation
    }

    /// Activity catalog
    pub fn activities(&self) -> &ActivityCatalog {
        &self.activities
    }

    /// Wellness snapshot
    pub fn wellness(&self) -> &WellnessSnapshot {
        &self.wellness
    }

    /// Preferences
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Flip a preference and return the new value
    pub fn toggle_preference(&mut self, pref: Preference) -> bool {
        let value = self.preferences.toggle(pref);
        tracing::debug!(?pref, value, "preference toggled");
        value
    }

    /// Setup wizard, present only while the setup screen is active
    pub fn setup(&self) -> Option<&SetupWizard> {
        self.setup.as_ref()
    }

    /// Mutable setup wizard
    pub fn setup_mut(&mut self) -> Option<&mut SetupWizard> {
        self.setup.as_mut()
    }

    /// Press the wizard's primary button. Completion navigates home.
    pub fn submit_setup(&mut self) -> SetupOutcome {
        let outcome = match self.setup.as_mut() {
            Some(wizard) => wizard.submit(),
            None => SetupOutcome::Rejected,
        };
        if outcome == SetupOutcome::Completed {
            self.go_to(Screen::Home);
        }
        outcome
    }

    /// Send a user message (blank input is ignored)
    pub fn send_message(&mut self, text: &str) -> Option<MessageId> {
        self.conversation.send(text)
    }

    /// Active call, present only while the voice screen is active
    pub fn call(&self) -> Option<&CallSession> {
        self.call.as_ref()
    }

    /// Deliver one timer tick to the active call
    pub fn tick_call(&mut self, generation: CallGeneration) -> bool {
        if self.screen() != Screen::Voice {
            return false;
        }
        self.call
            .as_mut()
            .map(|call| call.tick(generation))
            .unwrap_or(false)
    }

    /// Flip the mute toggle of the active call
    pub fn toggle_mute(&mut self) -> Option<bool> {
        self.call.as_mut().map(CallSession::toggle_mute)
    }

    /// Hang up and return to chat
    pub fn end_call(&mut self) -> Option<Transition> {
        if let Some(call) = self.call.as_mut() {
            call.end();
        }
        self.go_to(Screen::Chat)
    }

    /// Return to onboarding
    pub fn log_out(&mut self) -> Option<Transition> {
        self.go_to(Screen::Onboarding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen() {
        let state = AppState::new();
        assert_eq!(state.screen(), Screen::Onboarding);
        assert!(state.setup().is_none());
        assert!(state.call().is_none());
        assert_eq!(state.conversation().len(), 4);
    }

    #[test]
    fn test_go_to_reports_transition() {
        let mut state = AppState::new();
        let t = state.go_to(Screen::Home).unwrap();
        assert_eq!(t.from, Screen::Onboarding);
        assert_eq!(t.to, Screen::Home);
        assert_eq!(state.go_to(Screen::Home), None);
    }

    #[test]
    fn test_setup_lifecycle() {
        let mut state = AppState::new();
        state.go_to(Screen::Setup);
        state.setup_mut().unwrap().set_name("Alex");
        state.submit_setup();
        assert_eq!(state.setup().unwrap().step().number(), 2);

        state.go_to(Screen::Onboarding);
        assert!(state.setup().is_none());

        state.go_to(Screen::Setup);
        assert_eq!(state.setup().unwrap().step().number(), 1);
        assert!(state.setup().unwrap().draft().name.is_empty());
    }

    #[test]
    fn test_complete_setup_goes_home() {
        let mut state = AppState::new();
        state.go_to(Screen::Setup);
        {
            let wizard = state.setup_mut().unwrap();
            wizard.set_name("Alex");
            wizard.draft_mut().toggle_interest("Reading");
        }
        state.submit_setup();
        state.submit_setup();
        assert_eq!(state.submit_setup(), SetupOutcome::Completed);
        assert_eq!(state.screen(), Screen::Home);
        assert!(state.setup().is_none());
        // Profile stays as seeded
        assert_eq!(state.profile().name, "Alex");
    }

    #[test]
    fn test_complete_setup_without_interests_stays() {
        let mut state = AppState::new();
        state.go_to(Screen::Setup);
        state.setup_mut().unwrap().set_name("Alex");
        state.submit_setup();
        state.submit_setup();
        assert_eq!(state.submit_setup(), SetupOutcome::Rejected);
        assert_eq!(state.screen(), Screen::Setup);
    }

    #[test]
    fn test_call_lifecycle() {
        let mut state = AppState::new();
        state.go_to(Screen::Voice);
        let generation = state.call().unwrap().generation();
        for _ in 0..65 {
            state.tick_call(generation);
        }
        assert_eq!(state.call().unwrap().display(), "01:05");

        state.end_call();
        assert_eq!(state.screen(), Screen::Chat);
        assert!(state.call().is_none());
        assert!(!state.tick_call(generation));
    }

    #[test]
    fn test_new_call_gets_new_generation() {
        let mut state = AppState::new();
        state.go_to(Screen::Voice);
        let first = state.call().unwrap().generation();
        state.go_to(Screen::Chat);
        state.go_to(Screen::Voice);
        let second = state.call().unwrap().generation();
        assert!(second > first);
        assert!(!state.tick_call(first));
        assert_eq!(state.call().unwrap().elapsed_secs(), 0);
    }

    #[test]
    fn test_log_out() {
        let mut state = AppState::new();
        state.go_to(Screen::Home);
        state.go_to(Screen::Settings);
        state.log_out();
        assert_eq!(state.screen(), Screen::Onboarding);
        assert!(state.setup().is_none());
    }
}
