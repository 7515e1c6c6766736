//! Score entries and the persistent leaderboard

mod store;

pub use store::{JsonFileSlot, LeaderboardStore, ScoreSlot};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score for a finished round: rewards remaining time, penalizes flips,
/// clamped at zero so no score is negative.
pub fn compute_score(time_remaining: u32, total_flips: u32) -> u32 {
    time_remaining.saturating_mul(10).saturating_sub(total_flips)
}

/// One persisted leaderboard record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    /// When the score was recorded. Optional so slots holding plain
    /// `{name, score}` arrays still load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ScoreEntry {
    /// Create an entry stamped with the current time.
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            recorded_at: Some(Utc::now()),
        }
    }
}

/// A leaderboard row ready for display: 1-based rank, name, score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub score: u32,
}
