//! The game-session state machine
//!
//! A session owns one round: the card set, the countdown, flip
//! bookkeeping, and match resolution. It is a synchronous state machine;
//! timed inputs (arming, countdown ticks, mismatch reveals) arrive from
//! the [`SessionDriver`](crate::game::driver::SessionDriver).

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::game::cards::{Card, CardId, FaceValue, Visibility};
use crate::game::shuffle::shuffle_cards;
use crate::game::traits::{AudioNotifier, GameDisplay};
use crate::leaderboard::compute_score;

/// Collaborators the session reports to while running
#[derive(Clone)]
pub struct SessionHooks {
    pub display: Arc<dyn GameDisplay>,
    pub audio: Arc<dyn AudioNotifier>,
}

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Board blanked, input blocked until the arming delay elapses
    Arming,
    /// Countdown running, flips accepted
    Running,
    /// Round over; the session is discarded, never reused
    Finished(Outcome),
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    GameOver,
}

/// Result of a single flip input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Guarded off: busy, already matched, the pending candidate itself,
    /// an unknown id, or the session is not running. No state changed.
    Rejected,
    /// The card became the pending candidate
    Candidate,
    /// Second card matched the candidate
    Matched,
    /// Second card did not match; both stay revealed until the reveal
    /// window closes via [`Session::conceal_mismatch`]
    Mismatch { first: CardId, second: CardId },
    /// The match completed the board
    Victory { score: u32 },
}

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    Continue,
    /// The session is no longer running; stop the countdown silently
    Halt,
    /// This tick exhausted the clock and ended the game
    Expired,
}

/// One round of the matching game.
pub struct Session {
    id: Uuid,
    player: String,
    time_limit: u32,
    time_remaining: u32,
    total_flips: u32,
    cards: Vec<Card>,
    candidate: Option<CardId>,
    matched: HashSet<CardId>,
    busy: bool,
    phase: SessionPhase,
    hooks: SessionHooks,
}

impl Session {
    /// Create a session over `cards` for `player` with a countdown of
    /// `time_limit` seconds.
    ///
    /// Each face value must appear exactly twice; odd or empty card sets
    /// are a caller error and are not guarded against.
    pub fn new(
        player: impl Into<String>,
        cards: Vec<Card>,
        time_limit: u32,
        hooks: SessionHooks,
    ) -> Self {
        debug_assert!(
            !cards.is_empty() && cards.len() % 2 == 0,
            "card set must be non-empty and even"
        );
        Self {
            id: Uuid::new_v4(),
            player: player.into(),
            time_limit,
            time_remaining: time_limit,
            total_flips: 0,
            cards,
            candidate: None,
            matched: HashSet::new(),
            busy: true,
            phase: SessionPhase::Arming,
            hooks,
        }
    }

    /// Reset the round state and blank the board. The session stays busy
    /// until [`Session::arm`] runs after the arming delay, so nothing can
    /// be flipped mid-transition.
    pub fn begin(&mut self) {
        self.total_flips = 0;
        self.time_remaining = self.time_limit;
        self.candidate = None;
        self.matched.clear();
        self.busy = true;
        self.phase = SessionPhase::Arming;

        for card in &mut self.cards {
            card.set_visibility(Visibility::Hidden);
            self.hooks.display.show_card(card.id(), Visibility::Hidden);
        }
        self.hooks.display.show_time_remaining(self.time_remaining);
        self.hooks.display.show_flip_count(self.total_flips);

        debug!(session = %self.id, player = %self.player, "round reset");
    }

    /// Shuffle the card order, deal display slots, start the music, and
    /// open for input. Valid only while arming; the driver starts the
    /// countdown once this returns.
    pub fn arm<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase != SessionPhase::Arming {
            return;
        }

        self.hooks.audio.start_music();
        shuffle_cards(&mut self.cards, rng);
        for (slot, card) in self.cards.iter().enumerate() {
            self.hooks.display.place_card(card.id(), slot);
        }
        self.busy = false;
        self.phase = SessionPhase::Running;

        info!(session = %self.id, cards = self.cards.len(), "round armed");
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> CountdownStep {
        if self.phase != SessionPhase::Running {
            return CountdownStep::Halt;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.hooks.display.show_time_remaining(self.time_remaining);

        if self.time_remaining == 0 {
            self.finish(Outcome::GameOver);
            CountdownStep::Expired
        } else {
            CountdownStep::Continue
        }
    }

    /// Flip a card.
    ///
    /// Rejected flips change nothing and emit nothing. An accepted flip
    /// reveals the card and either arms it as the candidate or resolves
    /// it against the pending one.
    pub fn flip(&mut self, id: CardId) -> FlipOutcome {
        if !self.can_flip(id) {
            return FlipOutcome::Rejected;
        }

        self.hooks.audio.flip();
        self.total_flips += 1;
        self.hooks.display.show_flip_count(self.total_flips);
        self.set_visibility(id, Visibility::Revealed);

        match self.candidate.take() {
            None => {
                self.candidate = Some(id);
                FlipOutcome::Candidate
            }
            Some(candidate) => self.resolve_pair(candidate, id),
        }
    }

    /// Close the mismatch-reveal window: hide both cards and accept
    /// input again.
    pub fn conceal_mismatch(&mut self, first: CardId, second: CardId) {
        self.set_visibility(first, Visibility::Hidden);
        self.set_visibility(second, Visibility::Hidden);
        self.busy = false;
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) -> FlipOutcome {
        if self.face(first) == self.face(second) {
            self.matched.insert(first);
            self.matched.insert(second);
            self.set_visibility(first, Visibility::Matched);
            self.set_visibility(second, Visibility::Matched);
            self.hooks.audio.matched();

            if self.matched.len() == self.cards.len() {
                let score = compute_score(self.time_remaining, self.total_flips);
                self.finish(Outcome::Victory);
                FlipOutcome::Victory { score }
            } else {
                FlipOutcome::Matched
            }
        } else {
            self.busy = true;
            FlipOutcome::Mismatch { first, second }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        if matches!(self.phase, SessionPhase::Finished(_)) {
            return;
        }
        // Phase flips before any notification: a tick landing after this
        // point halts instead of firing the outcome a second time.
        self.phase = SessionPhase::Finished(outcome);

        self.hooks.audio.stop_music();
        match outcome {
            Outcome::Victory => self.hooks.audio.victory(),
            Outcome::GameOver => self.hooks.audio.game_over(),
        }

        info!(
            session = %self.id,
            player = %self.player,
            ?outcome,
            flips = self.total_flips,
            time_remaining = self.time_remaining,
            "round finished"
        );
    }

    fn can_flip(&self, id: CardId) -> bool {
        self.phase == SessionPhase::Running
            && !self.busy
            && !self.matched.contains(&id)
            && self.candidate != Some(id)
            && self.card(id).is_some()
    }

    fn set_visibility(&mut self, id: CardId, visibility: Visibility) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id() == id) {
            card.set_visibility(visibility);
            self.hooks.display.show_card(id, visibility);
        }
    }

    fn face(&self, id: CardId) -> Option<&FaceValue> {
        self.card(id).map(|c| c.face())
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn total_flips(&self) -> u32 {
        self.total_flips
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn candidate(&self) -> Option<CardId> {
        self.candidate
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }
}
