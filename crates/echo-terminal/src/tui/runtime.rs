//! # TUI Runtime
//!
//! Drives the pure state machine with real effects:
//!
//! - **State**: owned [`TuiState`]
//! - **Transitions**: computed by [`transition`]
//! - **Effects**: executed here (drawing, toasts, the call timer)
//!
//! The runtime is generic over the ratatui backend so tests can run it against
//! `TestBackend` and a scripted input stream.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::{Stream, StreamExt};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::EchoConfig;
use crate::error::Result;
use crate::tui::events::TerminalEvent;
use crate::tui::screens;
use crate::tui::state::{transition, TuiCommand, TuiState};
use crate::tui::timer::CallTimer;

/// Timing knobs taken from the config
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// UI tick period
    pub tick_rate: Duration,
    /// Call timer period
    pub call_period: Duration,
    /// Ticks a toast stays visible
    pub toast_ticks: u32,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::from_config(&EchoConfig::default())
    }
}

impl RuntimeSettings {
    /// Extract settings from the config
    pub fn from_config(config: &EchoConfig) -> Self {
        Self {
            tick_rate: config.tick_rate(),
            call_period: config.call_period(),
            toast_ticks: config.ui.toast_ticks,
        }
    }
}

/// Runtime that owns the terminal, the state and the call timer
pub struct TuiRuntime<B: Backend> {
    terminal: Terminal<B>,
    state: TuiState,
    settings: RuntimeSettings,
    timer: CallTimer,
    events_rx: mpsc::UnboundedReceiver<TerminalEvent>,
}

impl<B: Backend> TuiRuntime<B> {
    /// Create a runtime drawing to `backend`
    pub fn new(backend: B, state: TuiState, settings: RuntimeSettings) -> Result<Self> {
        let terminal = Terminal::new(backend)?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let timer = CallTimer::new(settings.call_period, events_tx);
        Ok(Self {
            terminal,
            state,
            settings,
            timer,
            events_rx,
        })
    }

    /// Current state
    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Call timer
    pub fn timer(&self) -> &CallTimer {
        &self.timer
    }

    /// The terminal (for inspecting a test backend)
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run one event through the state machine and execute the resulting commands
    pub fn handle_event(&mut self, event: TerminalEvent) -> Vec<TuiCommand> {
        let (next, commands) = transition(&self.state, event);
        self.state = next;
        for command in &commands {
            self.execute_command(command.clone());
        }
        commands
    }

    /// Handle every event already waiting in the internal channel
    pub fn drain_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    fn execute_command(&mut self, command: TuiCommand) {
        match command {
            // Checked by the run loop through `should_exit`
            TuiCommand::Exit => self.timer.stop(),
            TuiCommand::ShowToast { message, level } => {
                self.state
                    .push_toast(message, level, self.settings.toast_ticks);
            }
            TuiCommand::StartCallTimer { generation } => self.timer.start(generation),
            TuiCommand::StopCallTimer => self.timer.stop(),
        }
    }

    /// Render one frame
    pub fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|f| screens::render(f, state))?;
        Ok(())
    }

    /// Run until the user quits or `input` ends
    pub async fn run<S>(&mut self, mut input: S) -> Result<()>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        let mut ticker = interval(self.settings.tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(screen = %self.state.screen(), "tui started");
        self.draw()?;

        while !self.state.should_exit {
            tokio::select! {
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(event) = TerminalEvent::from_crossterm(event) {
                            self.handle_event(event);
                        }
                    }
                    Some(Err(e)) => {
                        self.timer.stop();
                        return Err(e.into());
                    }
                    None => break,
                },
                _ = ticker.tick() => {
                    self.handle_event(TerminalEvent::Tick);
                }
                Some(event) = self.events_rx.recv() => {
                    self.handle_event(event);
                }
            }
            self.draw()?;
        }

        self.timer.stop();
        tracing::info!("tui stopped");
        Ok(())
    }
}

/// Take over the real terminal, run the app and always restore the terminal
pub async fn run_terminal(state: TuiState, settings: RuntimeSettings) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let result = match TuiRuntime::new(CrosstermBackend::new(io::stdout()), state, settings) {
        Ok(mut runtime) => {
            let result = runtime.run(EventStream::new()).await;
            let _ = runtime.terminal.show_cursor();
            result
        }
        Err(e) => Err(e),
    };

    let restore_raw = disable_raw_mode();
    let restore_screen = execute!(io::stdout(), LeaveAlternateScreen);
    result?;
    restore_raw?;
    restore_screen?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::events::events;
    use echo_app::Screen;
    use ratatui::backend::TestBackend;

    fn runtime() -> TuiRuntime<TestBackend> {
        TuiRuntime::new(
            TestBackend::new(80, 30),
            TuiState::new(),
            RuntimeSettings::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_toast_command_enqueues_with_configured_ticks() {
        let mut rt = runtime();
        rt.state.app.go_to(Screen::Settings);
        rt.handle_event(events::enter());
        let toast = rt.state().toast_queue.current().unwrap();
        assert_eq!(toast.message, "Dark Mode off");
        assert_eq!(toast.ticks_remaining, 12);
    }

    #[tokio::test]
    async fn test_exit_stops_timer() {
        let mut rt = runtime();
        rt.state.app.go_to(Screen::Home);
        rt.handle_event(events::char('v'));
        assert!(rt.timer().is_running());
        rt.handle_event(events::ctrl('c'));
        assert!(rt.state().should_exit);
        assert!(!rt.timer().is_running());
    }

    #[tokio::test]
    async fn test_run_ends_with_input() {
        let mut rt = runtime();
        let input = futures::stream::iter(vec![Ok(Event::Key(
            crossterm::event::KeyEvent::from(crossterm::event::KeyCode::Enter),
        ))]);
        rt.run(input).await.unwrap();
        assert_eq!(rt.state().screen(), Screen::Setup);
    }
}
