//! # TUI State Machine
//!
//! Pure state machine for the terminal front end:
//!
//! ```text
//! transition(&TuiState, TerminalEvent) -> (TuiState, Vec<TuiCommand>)
//! ```
//!
//! The function does no I/O. Timer control and toasts come back as
//! [`TuiCommand`]s that the runtime executes, so every behaviour can be tested
//! by replaying events.

mod commands;
mod handlers;
mod toast;
mod views;

pub use commands::TuiCommand;
pub use toast::{QueuedToast, ToastLevel, ToastQueue};
pub use views::{
    ActivitiesViewState, ChatViewState, HomeViewState, SettingsRow, SettingsViewState,
    SetupViewState,
};

use echo_app::{AppState, NavAction, Screen, SetupStep, Transition};

use crate::tui::events::TerminalEvent;

/// Complete TUI state
#[derive(Clone, Debug)]
pub struct TuiState {
    /// Headless application state
    pub app: AppState,
    /// Setup screen
    pub setup: SetupViewState,
    /// Chat screen
    pub chat: ChatViewState,
    /// Home screen
    pub home: HomeViewState,
    /// Activity browser
    pub activities: ActivitiesViewState,
    /// Settings screen
    pub settings: SettingsViewState,
    /// Pending toasts
    pub toast_queue: ToastQueue,
    /// Next toast id
    pub next_toast_id: u64,
    /// Help overlay visible
    pub show_help: bool,
    /// Set once the user asked to quit
    pub should_exit: bool,
    /// Last known terminal size
    pub terminal_size: (u16, u16),
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    /// Fresh state on the onboarding screen
    pub fn new() -> Self {
        Self::with_app(AppState::new())
    }

    /// Wrap an existing app state
    pub fn with_app(app: AppState) -> Self {
        Self {
            app,
            setup: SetupViewState::default(),
            chat: ChatViewState::default(),
            home: HomeViewState::default(),
            activities: ActivitiesViewState::default(),
            settings: SettingsViewState::default(),
            toast_queue: ToastQueue::default(),
            next_toast_id: 0,
            show_help: false,
            should_exit: false,
            terminal_size: (80, 24),
        }
    }

    /// Active screen
    pub fn screen(&self) -> Screen {
        self.app.screen()
    }

    /// Whether printable keys go into a text field
    pub fn is_typing(&self) -> bool {
        match self.screen() {
            Screen::Chat => true,
            Screen::Setup => self
                .app
                .setup()
                .map(|wizard| wizard.step() == SetupStep::Name)
                .unwrap_or(false),
            Screen::Activities => self.activities.searching,
            _ => false,
        }
    }

    /// Queue a toast
    pub fn push_toast(&mut self, message: String, level: ToastLevel, ticks: u32) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toast_queue.enqueue(QueuedToast {
            id,
            message,
            level,
            ticks_remaining: ticks,
        });
    }

    /// Navigate and run the front-end side of the enter/leave hooks
    pub(crate) fn navigate(&mut self, action: NavAction, commands: &mut Vec<TuiCommand>) {
        if let Some(transition) = self.app.navigate(action) {
            self.after_transition(transition, commands);
        }
    }

    pub(crate) fn after_transition(
        &mut self,
        transition: Transition,
        commands: &mut Vec<TuiCommand>,
    ) {
        if transition.from == Screen::Voice {
            commands.push(TuiCommand::StopCallTimer);
        }
        if transition.from == Screen::Setup || transition.to == Screen::Setup {
            self.setup = SetupViewState::default();
        }
        match transition.to {
            Screen::Voice => {
                if let Some(call) = self.app.call() {
                    commands.push(TuiCommand::StartCallTimer {
                        generation: call.generation(),
                    });
                }
            }
            Screen::Home => self.home.menu_open = false,
            Screen::Activities => self.activities.searching = false,
            _ => {}
        }
    }
}

/// Pure transition function
pub fn transition(state: &TuiState, event: TerminalEvent) -> (TuiState, Vec<TuiCommand>) {
    let mut next = state.clone();
    let mut commands = Vec::new();

    match event {
        TerminalEvent::Key(key) => handlers::handle_key(&mut next, key, &mut commands),
        TerminalEvent::Tick => next.toast_queue.tick(),
        TerminalEvent::CallTick { generation } => {
            if !next.app.tick_call(generation) {
                tracing::trace!(generation, "dropped call tick");
            }
        }
        TerminalEvent::Resize { width, height } => next.terminal_size = (width, height),
    }

    (next, commands)
}
