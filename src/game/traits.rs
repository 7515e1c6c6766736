//! Collaborator ports at the engine boundary

use crate::game::cards::{CardId, Visibility};
use crate::leaderboard::LeaderboardRow;

/// Rendering surface the session reports to.
///
/// Implementations map card ids to visual elements; the engine never
/// holds a reference to anything visual.
pub trait GameDisplay: Send + Sync {
    /// Seconds left on the countdown
    fn show_time_remaining(&self, seconds: u32);

    /// Total flips so far this round
    fn show_flip_count(&self, flips: u32);

    /// A card's visibility changed
    fn show_card(&self, card: CardId, visibility: Visibility);

    /// A card was dealt to a board position after shuffling
    fn place_card(&self, card: CardId, slot: usize);

    /// The ranked leaderboard view is ready to show
    fn show_leaderboard(&self, rows: &[LeaderboardRow]);
}

/// Fire-and-forget audio cues; the engine consumes no return values.
pub trait AudioNotifier: Send + Sync {
    fn start_music(&self);
    fn stop_music(&self);
    fn flip(&self);
    fn matched(&self);
    fn victory(&self);
    fn game_over(&self);
}

/// Outcome dialog port.
///
/// Notification is one half of a two-step protocol: the UI layer later
/// signals acknowledgment through [`GameApp::acknowledge_outcome`],
/// which triggers the leaderboard display.
///
/// [`GameApp::acknowledge_outcome`]: crate::app::GameApp::acknowledge_outcome
pub trait OutcomePrompt: Send + Sync {
    fn victory(&self, player: &str);
    fn game_over(&self, player: &str);
}
