//! # Call Timer
//!
//! Periodic task delivering [`TerminalEvent::CallTick`] while the voice screen is
//! active. Each start aborts the previous task, and stop or drop aborts the
//! current one, so at most one timer exists at a time.

use std::time::Duration;

use echo_app::CallGeneration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::tui::events::TerminalEvent;

/// Handle to the call-timer task
#[derive(Debug)]
pub struct CallTimer {
    period: Duration,
    events: UnboundedSender<TerminalEvent>,
    task: Option<(CallGeneration, JoinHandle<()>)>,
}

impl CallTimer {
    /// Create a stopped timer that sends ticks to `events`
    pub fn new(period: Duration, events: UnboundedSender<TerminalEvent>) -> Self {
        Self {
            period,
            events,
            task: None,
        }
    }

    /// Start ticking for `generation`, replacing any running timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, generation: CallGeneration) {
        self.stop();

        let period = self.period;
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if events.send(TerminalEvent::CallTick { generation }).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(generation, period_ms = period.as_millis() as u64, "call timer started");
        self.task = Some((generation, handle));
    }

    /// Cancel the running timer, if any
    pub fn stop(&mut self) {
        if let Some((generation, handle)) = self.task.take() {
            handle.abort();
            tracing::debug!(generation, "call timer stopped");
        }
    }

    /// Whether a timer task is held
    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .map(|(_, handle)| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Generation of the running timer
    pub fn generation(&self) -> Option<CallGeneration> {
        self.task.as_ref().map(|(generation, _)| *generation)
    }
}

impl Drop for CallTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
