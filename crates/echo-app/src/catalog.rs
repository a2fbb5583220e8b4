//! # Display Records
//!
//! Profile, activity catalog and wellness snapshot, plus the demo seed.
//! Everything here is read-only once the app starts.

use serde::{Deserialize, Serialize};

use crate::conversation::Sender;

/// User profile shown on the dashboard and settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Consecutive active days
    pub streak: u32,
    /// Activities joined so far
    pub activities_completed: u32,
    /// Total minutes spent talking with the companion
    pub conversation_minutes: u32,
}

/// Activity category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    /// Meetups and gatherings
    Social,
    /// Exercise groups
    Fitness,
    /// Games and shows
    Entertainment,
    /// Helping out
    Volunteering,
}

impl ActivityCategory {
    /// All categories in chip order
    pub fn all() -> &'static [ActivityCategory] {
        &[
            ActivityCategory::Social,
            ActivityCategory::Fitness,
            ActivityCategory::Entertainment,
            ActivityCategory::Volunteering,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Social => "Social",
            ActivityCategory::Fitness => "Fitness",
            ActivityCategory::Entertainment => "Entertainment",
            ActivityCategory::Volunteering => "Volunteering",
        }
    }
}

/// A local activity listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Identifier
    pub id: u32,
    /// Title
    pub title: String,
    /// Venue
    pub location: String,
    /// When, as a display label
    pub time: String,
    /// Number of people going
    pub attendees: u32,
    /// Category chip
    pub category: ActivityCategory,
    /// Interest tag used for recommendations
    pub interest: String,
}

/// Category chip selection on the activity browser
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only the given category
    Only(ActivityCategory),
}

impl CategoryFilter {
    /// Chips in display order, "All" first
    pub fn chips() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ActivityCategory::all().iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Next chip, wrapping
    pub fn next(&self) -> CategoryFilter {
        let chips = Self::chips();
        let idx = chips.iter().position(|c| c == self).unwrap_or(0);
        chips[(idx + 1) % chips.len()]
    }

    /// Previous chip, wrapping
    pub fn prev(&self) -> CategoryFilter {
        let chips = Self::chips();
        let idx = chips.iter().position(|c| c == self).unwrap_or(0);
        chips[(idx + chips.len() - 1) % chips.len()]
    }

    fn matches(&self, activity: &Activity) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => activity.category == *category,
        }
    }
}

/// Category plus free-text search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Selected category chip
    pub category: CategoryFilter,
    /// Case-insensitive substring matched against title and location
    pub query: String,
}

impl ActivityFilter {
    /// Whether an activity passes the filter
    pub fn matches(&self, activity: &Activity) -> bool {
        if !self.category.matches(activity) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || activity.title.to_lowercase().contains(&query)
            || activity.location.to_lowercase().contains(&query)
            || activity.interest.to_lowercase().contains(&query)
    }
}

/// Read-only list of activities
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Wrap a list of activities
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Every activity
    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    /// First `n` activities, shown on the dashboard
    pub fn recommended(&self, n: usize) -> &[Activity] {
        &self.activities[..n.min(self.activities.len())]
    }

    /// Activities matching the filter, in catalog order
    pub fn filtered<'a>(&'a self, filter: &'a ActivityFilter) -> impl Iterator<Item = &'a Activity> {
        self.activities.iter().filter(move |a| filter.matches(a))
    }
}

/// A labelled weekly percentage
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMetric {
    /// Label
    pub label: String,
    /// Percentage, 0-100
    pub percent: u16,
}

/// Wellness readings for today
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WellnessSnapshot {
    /// Mood score, 0-10
    pub mood_score: f32,
    /// Sleep last night, hours
    pub sleep_hours: f32,
    /// Steps today
    pub step_count: u32,
    /// Average heart rate, bpm
    pub heart_rate: u32,
    /// Social interactions today
    pub social_interactions: u32,
    /// Weekly progress bars
    pub weekly: Vec<WeeklyMetric>,
}

impl WellnessSnapshot {
    /// Index (0-4) of the highlighted mood face for the current score
    pub fn mood_index(&self) -> usize {
        ((self.mood_score.clamp(0.0, 10.0) / 2.0).floor() as usize).min(4)
    }
}

/// Initial data for a session
#[derive(Clone, Debug, PartialEq)]
pub struct SeedData {
    /// Profile
    pub profile: Profile,
    /// Conversation seed as (sender, text, time label)
    pub conversation: Vec<(Sender, String, String)>,
    /// Activity catalog
    pub activities: Vec<Activity>,
    /// Wellness snapshot
    pub wellness: WellnessSnapshot,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Alex".to_string(),
                streak: 7,
                activities_completed: 12,
                conversation_minutes: 145,
            },
            conversation: vec![
                (
                    Sender::User,
                    "I've been feeling lonely lately...".to_string(),
                    "2 min ago".to_string(),
                ),
                (
                    Sender::Companion,
                    "I hear you, Alex. Loneliness can be really challenging. Would you like to talk about what's been going on?".to_string(),
                    "2 min ago".to_string(),
                ),
                (
                    Sender::User,
                    "I just moved to a new city and don't know anyone here.".to_string(),
                    "1 min ago".to_string(),
                ),
                (
                    Sender::Companion,
                    "Moving to a new place is a big transition. It's completely normal to feel this way. I've found some local meetup groups that match your interests. Would you like to explore them together?".to_string(),
                    "Just now".to_string(),
                ),
            ],
            activities: vec![
                activity(1, "Coffee Meetup - Book Lovers", "Downtown Cafe", "Tomorrow, 3 PM", 8, ActivityCategory::Social, "reading"),
                activity(2, "Hiking Group", "Mountain Trail", "Saturday, 8 AM", 12, ActivityCategory::Fitness, "outdoor"),
                activity(3, "Board Game Night", "Game Cafe", "Friday, 7 PM", 15, ActivityCategory::Entertainment, "games"),
                activity(4, "Volunteer at Animal Shelter", "Local Shelter", "Sunday, 10 AM", 6, ActivityCategory::Volunteering, "animals"),
            ],
            wellness: WellnessSnapshot {
                mood_score: 7.2,
                sleep_hours: 7.5,
                step_count: 8420,
                heart_rate: 72,
                social_interactions: 3,
                weekly: vec![
                    WeeklyMetric { label: "Mood Consistency".to_string(), percent: 85 },
                    WeeklyMetric { label: "Social Activity".to_string(), percent: 72 },
                    WeeklyMetric { label: "Physical Wellness".to_string(), percent: 68 },
                ],
            },
        }
    }
}

fn activity(
    id: u32,
    title: &str,
    location: &str,
    time: &str,
    attendees: u32,
    category: ActivityCategory,
    interest: &str,
) -> Activity {
    Activity {
        id,
        title: title.to_string(),
        location: location.to_string(),
        time: time.to_string(),
        attendees,
        category,
        interest: interest.to_string(),
    }
}

/// Format a count with thousands separators (8420 -> "8,420")
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
