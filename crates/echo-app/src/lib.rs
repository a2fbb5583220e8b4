//! # Echo App - Headless Core
//!
//! Pure view-state for the Echo companion app: screen routing, the setup wizard,
//! the conversation log, the simulated voice call and the read-only display records.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        echo-terminal         │  rendering, key handling, timers
//! └──────────────┬───────────────┘
//!                │
//!                ↓
//! ┌──────────────────────────────┐
//! │           echo-app           │  ← THIS CRATE
//! │  AppState, Router,           │
//! │  SetupWizard, CallSession    │
//! └──────────────────────────────┘
//! ```
//!
//! Nothing here performs I/O or owns a clock. Front ends drive the state through
//! [`AppState`] and deliver call ticks themselves.

pub mod call;
pub mod catalog;
pub mod conversation;
pub mod preferences;
pub mod router;
pub mod state;
pub mod wizard;

pub use call::{format_elapsed, CallGeneration, CallSession};
pub use catalog::{
    group_thousands, Activity, ActivityCatalog, ActivityCategory, ActivityFilter, CategoryFilter,
    Profile, SeedData, WeeklyMetric, WellnessSnapshot,
};
pub use conversation::{ConversationLog, Message, MessageId, Sender, JUST_NOW};
pub use preferences::{Preference, Preferences};
pub use router::{NavAction, Router, Screen};
pub use state::{AppState, Transition};
pub use wizard::{SetupDraft, SetupOutcome, SetupStep, SetupWizard, GOAL_OPTIONS, INTEREST_OPTIONS};
