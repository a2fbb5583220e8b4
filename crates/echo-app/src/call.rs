//! # Voice Call Session
//!
//! Elapsed-time counter and cosmetic controls for the simulated call.
//! The session does not own a clock; the front end delivers one tick per second.

/// Monotonic call counter used to discard ticks from a finished call
pub type CallGeneration = u64;

/// State of one simulated voice call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSession {
    generation: CallGeneration,
    elapsed_secs: u64,
    active: bool,
    muted: bool,
}

impl CallSession {
    /// Start a call at 00:00
    pub fn start(generation: CallGeneration) -> Self {
        Self {
            generation,
            elapsed_secs: 0,
            active: true,
            muted: false,
        }
    }

    /// Generation this session was started with
    pub fn generation(&self) -> CallGeneration {
        self.generation
    }

    /// Seconds since the call started
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Whether the counter is still running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the (cosmetic) mute toggle is on
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Advance the counter by one second.
    ///
    /// Ignored once the call has ended or when the tick belongs to another call.
    pub fn tick(&mut self, generation: CallGeneration) -> bool {
        if !self.active || generation != self.generation {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    /// Flip the mute toggle and return the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Stop the counter
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Elapsed time as `MM:SS`
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }
}

/// Format seconds as zero-padded `MM:SS`. Minutes are not capped.
pub fn format_elapsed(seconds: u64) -> String {
    let (minutes, secs) = (seconds / 60, seconds % 60);
    format!("{minutes:02}:{secs:02}")
}
