//! Mixmatch - a timed memory card-matching game engine
//!
//! Mixmatch drives rounds of the classic flip-two-cards memory game:
//! - A session state machine owning the countdown, flip bookkeeping,
//!   and match/mismatch resolution
//! - Collaborator ports for rendering, audio cues, and outcome dialogs
//! - A persistent top-5 leaderboard scored by speed and flip efficiency

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod leaderboard;

// Re-export commonly used types for convenience
pub use error::{GameError, GameResult};

// Re-export the session engine
pub use game::{
    paired_deck, AudioNotifier, Card, CardId, CountdownStep, FaceValue, FlipOutcome, GameDisplay,
    Outcome, OutcomePrompt, Session, SessionDriver, SessionHooks, SessionPhase, SessionTiming,
    Visibility,
};

// Re-export leaderboard types
pub use leaderboard::{
    compute_score, JsonFileSlot, LeaderboardRow, LeaderboardStore, ScoreEntry, ScoreSlot,
};

// Re-export application flow
pub use app::{AppPhase, GameApp};

// Re-export configuration interfaces
pub use config::{GameConfig, LeaderboardConfig, MixmatchConfig};
