use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Nutrition,
    Exercise,
    Hydration,
    Rest,
    Appointment,
    Mindfulness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// An actionable suggestion surfaced to the user.
///
/// Completion and expiry are mutated by the app layer; the generator only
/// ever creates fresh, incomplete entries with no expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: RecommendationCategory,
    pub priority: RecommendationPriority,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub completed: bool,
}

impl Recommendation {
    /// Active means not completed and not past its expiry (an absent expiry
    /// never expires).
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.expires_at.map_or(true, |expires| now <= expires)
    }
}
