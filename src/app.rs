//! Top-level application flow: name entry, rounds, leaderboard display

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::config::MixmatchConfig;
use crate::error::{GameError, GameResult};
use crate::game::cards::{paired_deck, CardId, FaceValue};
use crate::game::driver::{SessionDriver, SessionTiming};
use crate::game::session::{FlipOutcome, Session, SessionHooks};
use crate::game::traits::{AudioNotifier, GameDisplay, OutcomePrompt};
use crate::leaderboard::{LeaderboardStore, ScoreEntry};

/// Where the player is in the menu flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    NameEntry,
    Playing,
    Results,
}

/// Owns the leaderboard store and the collaborator handles, and
/// sequences rounds: name entry, play, outcome, leaderboard, restart.
pub struct GameApp {
    config: MixmatchConfig,
    store: LeaderboardStore,
    display: Arc<dyn GameDisplay>,
    audio: Arc<dyn AudioNotifier>,
    prompt: Arc<dyn OutcomePrompt>,
    driver: Option<SessionDriver>,
    phase: AppPhase,
}

impl GameApp {
    /// Assemble the application around an already-opened store.
    pub fn new(
        config: MixmatchConfig,
        store: LeaderboardStore,
        display: Arc<dyn GameDisplay>,
        audio: Arc<dyn AudioNotifier>,
        prompt: Arc<dyn OutcomePrompt>,
    ) -> Self {
        Self {
            config,
            store,
            display,
            audio,
            prompt,
            driver: None,
            phase: AppPhase::NameEntry,
        }
    }

    /// Assemble the application, opening the leaderboard slot named by
    /// the configuration.
    pub fn open(
        config: MixmatchConfig,
        display: Arc<dyn GameDisplay>,
        audio: Arc<dyn AudioNotifier>,
        prompt: Arc<dyn OutcomePrompt>,
    ) -> GameResult<Self> {
        config.validate()?;
        let store = LeaderboardStore::open_file(&config.leaderboard.slot_path)?;
        Ok(Self::new(config, store, display, audio, prompt))
    }

    /// Start a round for `name` over a deck pairing `faces`.
    ///
    /// An empty (or all-whitespace) name is rejected without creating a
    /// session or touching any state. Replacing a running round cancels
    /// its scheduled tasks before the new session launches.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_game(&mut self, name: &str, faces: Vec<FaceValue>) -> GameResult<()> {
        let name = name.trim();
        if name.is_empty() {
            warn!("rejected start: empty player name");
            return Err(GameError::EmptyPlayerName);
        }

        self.driver = None;

        let deck = paired_deck(faces);
        let hooks = SessionHooks {
            display: self.display.clone(),
            audio: self.audio.clone(),
        };
        let session = Session::new(name, deck, self.config.game.time_limit_seconds, hooks);

        info!(player = name, "starting round");
        let timing = SessionTiming::from(&self.config.game);
        self.driver = Some(SessionDriver::launch(session, timing, self.prompt.clone()));
        self.phase = AppPhase::Playing;
        Ok(())
    }

    /// Flip a card in the current round. Without a round this is a
    /// no-op. A victory records the score before the prompt is raised.
    pub fn flip(&mut self, card: CardId) -> GameResult<FlipOutcome> {
        let (outcome, player) = match &self.driver {
            Some(driver) => (driver.flip(card), driver.player().to_string()),
            None => return Ok(FlipOutcome::Rejected),
        };

        if let FlipOutcome::Victory { score } = outcome {
            self.store.append(ScoreEntry::new(player.clone(), score))?;
            self.prompt.victory(&player);
        }

        Ok(outcome)
    }

    /// The acknowledgment half of the outcome dialog: push the ranked
    /// top entries to the display and move to the results screen.
    pub fn acknowledge_outcome(&mut self) {
        let rows = self.store.ranked_top(self.config.leaderboard.display_size);
        self.display.show_leaderboard(&rows);
        self.phase = AppPhase::Results;
    }

    /// Back to name entry for the next player.
    pub fn restart(&mut self) {
        self.driver = None;
        self.phase = AppPhase::NameEntry;
    }

    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    pub fn leaderboard(&self) -> &LeaderboardStore {
        &self.store
    }

    /// The running session, if a round is active.
    pub fn session(&self) -> Option<Arc<Mutex<Session>>> {
        self.driver.as_ref().map(|d| d.session())
    }
}
