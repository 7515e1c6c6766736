//! Leaderboard persistence: one named slot holding the full ordering

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{LeaderboardRow, ScoreEntry};
use crate::error::{GameError, GameResult};

/// Storage slot for the serialized leaderboard
pub trait ScoreSlot: Send + Sync {
    /// Read the stored sequence; an absent slot yields an empty one.
    fn load(&self) -> GameResult<Vec<ScoreEntry>>;

    /// Overwrite the slot with the full sequence.
    fn save(&self, entries: &[ScoreEntry]) -> GameResult<()>;
}

/// File-backed slot holding a JSON array of `{name, score}` entries
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreSlot for JsonFileSlot {
    fn load(&self) -> GameResult<Vec<ScoreEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                // A corrupt slot resets the board instead of refusing to start.
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "malformed leaderboard data, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entries: &[ScoreEntry]) -> GameResult<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw).map_err(|err| GameError::Persistence {
            message: format!("failed to write {}: {}", self.path.display(), err),
        })
    }
}

/// The process-wide leaderboard: loaded once at startup, appended to on
/// victories, persisted in full after every append.
pub struct LeaderboardStore {
    slot: Box<dyn ScoreSlot>,
    entries: Vec<ScoreEntry>,
}

impl LeaderboardStore {
    /// Load the stored ordering from `slot`.
    pub fn open(slot: Box<dyn ScoreSlot>) -> GameResult<Self> {
        let mut entries = slot.load()?;
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(entries = entries.len(), "leaderboard loaded");
        Ok(Self { slot, entries })
    }

    /// Open a JSON-file-backed leaderboard at `path`.
    pub fn open_file(path: impl Into<PathBuf>) -> GameResult<Self> {
        Self::open(Box::new(JsonFileSlot::new(path)))
    }

    /// Record a new score, keeping the sequence sorted descending by
    /// score (ties keep insertion order), and persist it in full.
    pub fn append(&mut self, entry: ScoreEntry) -> GameResult<()> {
        debug!(name = %entry.name, score = entry.score, "recording score");
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.slot.save(&self.entries)
    }

    /// First `n` entries of the descending ordering.
    pub fn top_n(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Display rows for the first `n` entries, ranked from 1.
    pub fn ranked_top(&self, n: usize) -> Vec<LeaderboardRow> {
        self.top_n(n)
            .iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardRow {
                rank: i + 1,
                name: entry.name.clone(),
                score: entry.score,
            })
            .collect()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
