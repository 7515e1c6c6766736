//! Scheduled-task ownership for a running session
//!
//! The driver translates wall-clock time into session inputs: the arming
//! delay, the repeating countdown tick, and per-mismatch reveal windows.
//! Every spawned task handle is retained, and dropping the driver aborts
//! them all, so replacing a session can never leave a stale countdown
//! firing into the next round.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::GameConfig;
use crate::game::cards::CardId;
use crate::game::session::{CountdownStep, FlipOutcome, Session};
use crate::game::traits::OutcomePrompt;

/// Delays governing a session's scheduled work
#[derive(Debug, Clone, Copy)]
pub struct SessionTiming {
    /// Pause between blanking the board and opening for input
    pub arming_delay: Duration,
    /// Countdown resolution; one tick removes one second
    pub tick_interval: Duration,
    /// How long a mismatched pair stays revealed
    pub mismatch_delay: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            arming_delay: Duration::from_millis(500),
            tick_interval: Duration::from_secs(1),
            mismatch_delay: Duration::from_secs(1),
        }
    }
}

impl From<&GameConfig> for SessionTiming {
    fn from(config: &GameConfig) -> Self {
        Self {
            arming_delay: Duration::from_millis(config.arming_delay_ms),
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            mismatch_delay: Duration::from_millis(config.mismatch_delay_ms),
        }
    }
}

/// Owns one session and its timed tasks.
pub struct SessionDriver {
    session: Arc<Mutex<Session>>,
    timing: SessionTiming,
    player: String,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl SessionDriver {
    /// Reset the session, then schedule the arming delay followed by the
    /// countdown. Timeout expiry raises the game-over prompt exactly once.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch(
        mut session: Session,
        timing: SessionTiming,
        prompt: Arc<dyn OutcomePrompt>,
    ) -> Self {
        session.begin();
        let player = session.player().to_string();
        let session = Arc::new(Mutex::new(session));

        let driver = Self {
            session: session.clone(),
            timing,
            player: player.clone(),
            tasks: Mutex::new(Vec::new()),
        };

        let handle = tokio::spawn(async move {
            tokio::time::sleep(timing.arming_delay).await;
            {
                let mut rng = StdRng::from_entropy();
                if let Ok(mut session) = session.lock() {
                    session.arm(&mut rng);
                }
            }

            loop {
                tokio::time::sleep(timing.tick_interval).await;
                let step = match session.lock() {
                    Ok(mut session) => session.tick(),
                    Err(_) => break,
                };
                match step {
                    CountdownStep::Continue => {}
                    CountdownStep::Halt => break,
                    CountdownStep::Expired => {
                        prompt.game_over(&player);
                        break;
                    }
                }
            }
        });
        driver.track(handle);

        driver
    }

    /// Forward a flip to the session. A mismatch schedules its reveal
    /// window before returning.
    pub fn flip(&self, id: CardId) -> FlipOutcome {
        let outcome = match self.session.lock() {
            Ok(mut session) => session.flip(id),
            Err(_) => return FlipOutcome::Rejected,
        };

        if let FlipOutcome::Mismatch { first, second } = outcome {
            let session = self.session.clone();
            let delay = self.timing.mismatch_delay;
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if let Ok(mut session) = session.lock() {
                    session.conceal_mismatch(first, second);
                }
            });
            self.track(handle);
        }

        outcome
    }

    /// Cancel every outstanding scheduled task.
    pub fn abort(&self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for handle in tasks.drain(..) {
                handle.abort();
            }
        }
        debug!(player = %self.player, "session tasks aborted");
    }

    pub fn session(&self) -> Arc<Mutex<Session>> {
        self.session.clone()
    }

    pub fn timing(&self) -> SessionTiming {
        self.timing
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    fn track(&self, handle: JoinHandle<()>) {
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.push(handle);
        }
    }
}

impl Drop for SessionDriver {
    fn drop(&mut self) {
        self.abort();
    }
}
