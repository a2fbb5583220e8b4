//! # Setup Wizard
//!
//! Three-step profile setup flow: name, interests, goals.
//! The draft lives only as long as the setup screen is active.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Interests offered on step 2
pub const INTEREST_OPTIONS: &[&str] = &[
    "Reading", "Fitness", "Gaming", "Cooking", "Music", "Art", "Outdoor", "Tech", "Animals",
    "Sports",
];

/// Goals offered on step 3
pub const GOAL_OPTIONS: &[&str] = &[
    "Make new friends",
    "Join activities",
    "Improve wellbeing",
    "Build confidence",
    "Stay active",
];

/// Steps in the setup wizard.
///
/// 1. Name - What should we call you?
/// 2. Interests - Pick any number of interest tags
/// 3. Goals - Pick any number of goals, then complete
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupStep {
    /// Enter a display name
    #[default]
    Name,
    /// Select interests
    Interests,
    /// Select goals
    Goals,
}

impl SetupStep {
    /// Get all steps in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Name, Self::Interests, Self::Goals]
    }

    /// Get the next step, or None if at the last step.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Interests),
            Self::Interests => Some(Self::Goals),
            Self::Goals => None,
        }
    }

    /// Get the previous step, or None if at the first step.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Name => None,
            Self::Interests => Some(Self::Name),
            Self::Goals => Some(Self::Interests),
        }
    }

    /// Check if this is the first step.
    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::Name
    }

    /// Check if this is the last step.
    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::Goals
    }

    /// Get step number (1-indexed for display).
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Name => 1,
            Self::Interests => 2,
            Self::Goals => 3,
        }
    }

    /// Get total number of steps.
    #[must_use]
    pub fn total_steps() -> u8 {
        3
    }

    /// Get the prompt shown above the step's input.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Name => "What should we call you?",
            Self::Interests => "What are you interested in?",
            Self::Goals => "What are your goals with Echo?",
        }
    }

    /// Get the hint shown below the step's input.
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Name => "This helps Echo personalize your experience",
            Self::Interests => "Select all that apply (you can change these later)",
            Self::Goals => "Pick as many as you like",
        }
    }

    /// Options offered on this step (empty for free-text steps).
    #[must_use]
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Name => &[],
            Self::Interests => INTEREST_OPTIONS,
            Self::Goals => GOAL_OPTIONS,
        }
    }
}

/// Answers collected by the wizard
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupDraft {
    /// Display name (required past step 1)
    pub name: String,
    /// Selected interests, in selection order
    pub interests: IndexSet<String>,
    /// Selected goals, in selection order
    pub goals: IndexSet<String>,
}

impl SetupDraft {
    /// Toggle an interest tag. Returns whether it is now selected.
    pub fn toggle_interest(&mut self, interest: &str) -> bool {
        toggle(&mut self.interests, interest)
    }

    /// Toggle a goal. Returns whether it is now selected.
    pub fn toggle_goal(&mut self, goal: &str) -> bool {
        toggle(&mut self.goals, goal)
    }

    /// Whether a tag is selected on the given step
    pub fn is_selected(&self, step: SetupStep, option: &str) -> bool {
        match step {
            SetupStep::Name => false,
            SetupStep::Interests => self.interests.contains(option),
            SetupStep::Goals => self.goals.contains(option),
        }
    }
}

fn toggle(set: &mut IndexSet<String>, tag: &str) -> bool {
    if set.shift_remove(tag) {
        false
    } else {
        set.insert(tag.to_string());
        true
    }
}

/// Outcome of pressing the wizard's primary button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Moved to the given step
    Advanced(SetupStep),
    /// Setup finished; the caller should navigate home
    Completed,
    /// Guard rejected the press
    Rejected,
}

/// Setup wizard state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupWizard {
    step: SetupStep,
    draft: SetupDraft,
}

impl SetupWizard {
    /// Create a wizard at step 1 with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step
    pub fn step(&self) -> SetupStep {
        self.step
    }

    /// Collected answers
    pub fn draft(&self) -> &SetupDraft {
        &self.draft
    }

    /// Mutable access to the answers
    pub fn draft_mut(&mut self) -> &mut SetupDraft {
        &mut self.draft
    }

    /// Replace the name field
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Whether `next` would move forward from the current step
    pub fn can_advance(&self) -> bool {
        match self.step {
            SetupStep::Name => !self.draft.name.is_empty(),
            SetupStep::Interests => true,
            SetupStep::Goals => false,
        }
    }

    /// Whether "Complete Setup" would succeed
    pub fn can_complete(&self) -> bool {
        self.step.is_last() && !self.draft.name.is_empty() && !self.draft.interests.is_empty()
    }

    /// Advance one step. Blocked on step 1 while the name is empty.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step (no-op on step 1)
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Primary button: `next` on steps 1-2, complete on step 3
    pub fn submit(&mut self) -> SetupOutcome {
        if self.step.is_last() {
            if self.can_complete() {
                SetupOutcome::Completed
            } else {
                SetupOutcome::Rejected
            }
        } else if self.next() {
            SetupOutcome::Advanced(self.step)
        } else {
            SetupOutcome::Rejected
        }
    }

    /// Progress bar fill, 0-100
    pub fn progress_percent(&self) -> u16 {
        u16::from(self.step.number()) * 100 / u16::from(SetupStep::total_steps())
    }
}
