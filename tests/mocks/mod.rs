//! Recording mock implementations of the collaborator ports

use std::sync::Mutex;

use mixmatch::{
    AudioNotifier, CardId, GameDisplay, GameResult, LeaderboardRow, OutcomePrompt, ScoreEntry,
    ScoreSlot, Visibility,
};

/// Everything the display was told, in order
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    Time(u32),
    Flips(u32),
    Card(CardId, Visibility),
    Slot(CardId, usize),
    Leaderboard(Vec<LeaderboardRow>),
}

#[derive(Default)]
pub struct RecordingDisplay {
    events: Mutex<Vec<DisplayEvent>>,
}

impl RecordingDisplay {
    pub fn events(&self) -> Vec<DisplayEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Last visibility reported for a card, if any
    pub fn card_state(&self, card: CardId) -> Option<Visibility> {
        self.events()
            .iter()
            .rev()
            .find_map(|event| match event {
                DisplayEvent::Card(id, visibility) if *id == card => Some(*visibility),
                _ => None,
            })
    }

    /// Every leaderboard view pushed to the display
    pub fn leaderboards(&self) -> Vec<Vec<LeaderboardRow>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                DisplayEvent::Leaderboard(rows) => Some(rows),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: DisplayEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl GameDisplay for RecordingDisplay {
    fn show_time_remaining(&self, seconds: u32) {
        self.push(DisplayEvent::Time(seconds));
    }

    fn show_flip_count(&self, flips: u32) {
        self.push(DisplayEvent::Flips(flips));
    }

    fn show_card(&self, card: CardId, visibility: Visibility) {
        self.push(DisplayEvent::Card(card, visibility));
    }

    fn place_card(&self, card: CardId, slot: usize) {
        self.push(DisplayEvent::Slot(card, slot));
    }

    fn show_leaderboard(&self, rows: &[LeaderboardRow]) {
        self.push(DisplayEvent::Leaderboard(rows.to_vec()));
    }
}

/// Audio cues in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    StartMusic,
    StopMusic,
    Flip,
    Match,
    Victory,
    GameOver,
}

#[derive(Default)]
pub struct RecordingAudio {
    cues: Mutex<Vec<AudioCue>>,
}

impl RecordingAudio {
    pub fn cues(&self) -> Vec<AudioCue> {
        self.cues.lock().unwrap().clone()
    }

    pub fn count(&self, cue: AudioCue) -> usize {
        self.cues().iter().filter(|c| **c == cue).count()
    }

    fn push(&self, cue: AudioCue) {
        self.cues.lock().unwrap().push(cue);
    }
}

impl AudioNotifier for RecordingAudio {
    fn start_music(&self) {
        self.push(AudioCue::StartMusic);
    }

    fn stop_music(&self) {
        self.push(AudioCue::StopMusic);
    }

    fn flip(&self) {
        self.push(AudioCue::Flip);
    }

    fn matched(&self) {
        self.push(AudioCue::Match);
    }

    fn victory(&self) {
        self.push(AudioCue::Victory);
    }

    fn game_over(&self) {
        self.push(AudioCue::GameOver);
    }
}

/// Outcome dialog notifications with the player name attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Victory(String),
    GameOver(String),
}

#[derive(Default)]
pub struct RecordingPrompt {
    events: Mutex<Vec<PromptEvent>>,
}

impl RecordingPrompt {
    pub fn events(&self) -> Vec<PromptEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl OutcomePrompt for RecordingPrompt {
    fn victory(&self, player: &str) {
        self.events
            .lock()
            .unwrap()
            .push(PromptEvent::Victory(player.to_string()));
    }

    fn game_over(&self, player: &str) {
        self.events
            .lock()
            .unwrap()
            .push(PromptEvent::GameOver(player.to_string()));
    }
}

/// In-memory score slot for leaderboard tests
#[derive(Default)]
pub struct MemorySlot {
    entries: Mutex<Vec<ScoreEntry>>,
}

impl MemorySlot {
    pub fn entries(&self) -> Vec<ScoreEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl ScoreSlot for MemorySlot {
    fn load(&self) -> GameResult<Vec<ScoreEntry>> {
        Ok(self.entries.lock().unwrap().clone())
    }

    fn save(&self, entries: &[ScoreEntry]) -> GameResult<()> {
        *self.entries.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}
