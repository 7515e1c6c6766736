//! Application-flow tests: name gating, outcome acknowledgment, restart

use std::sync::Arc;

use mixmatch::{
    AppPhase, FaceValue, GameApp, GameError, LeaderboardStore, MixmatchConfig, ScoreEntry,
};

use crate::mocks::{MemorySlot, RecordingAudio, RecordingDisplay, RecordingPrompt};

struct Harness {
    app: GameApp,
    display: Arc<RecordingDisplay>,
    audio: Arc<RecordingAudio>,
    prompt: Arc<RecordingPrompt>,
}

fn harness() -> Harness {
    let display = Arc::new(RecordingDisplay::default());
    let audio = Arc::new(RecordingAudio::default());
    let prompt = Arc::new(RecordingPrompt::default());
    let store = LeaderboardStore::open(Box::new(MemorySlot::default())).unwrap();
    let app = GameApp::new(
        MixmatchConfig::quick(),
        store,
        display.clone(),
        audio.clone(),
        prompt.clone(),
    );
    Harness {
        app,
        display,
        audio,
        prompt,
    }
}

fn faces() -> Vec<FaceValue> {
    vec![FaceValue::new("owl"), FaceValue::new("toad")]
}

#[tokio::test]
async fn test_empty_name_is_rejected_without_side_effects() {
    let mut h = harness();

    for name in ["", "   ", "\t\n"] {
        let err = h.app.start_game(name, faces()).unwrap_err();
        assert!(matches!(err, GameError::EmptyPlayerName));
    }

    assert_eq!(h.app.phase(), AppPhase::NameEntry);
    assert!(h.app.session().is_none());
    assert!(h.app.leaderboard().is_empty());
    assert!(h.audio.cues().is_empty());
    assert!(h.prompt.events().is_empty());
}

#[tokio::test]
async fn test_start_trims_the_player_name() {
    let mut h = harness();
    h.app.start_game("  Alice  ", faces()).unwrap();

    assert_eq!(h.app.phase(), AppPhase::Playing);
    let session = h.app.session().unwrap();
    assert_eq!(session.lock().unwrap().player(), "Alice");
}

#[tokio::test]
async fn test_acknowledge_outcome_shows_ranked_top_five() {
    let mut h = harness();
    let mut store = LeaderboardStore::open(Box::new(MemorySlot::default())).unwrap();
    for i in 0..7u32 {
        store
            .append(ScoreEntry::new(format!("p{i}"), i * 100))
            .unwrap();
    }
    h.app = GameApp::new(
        MixmatchConfig::quick(),
        store,
        h.display.clone(),
        h.audio.clone(),
        h.prompt.clone(),
    );

    h.app.acknowledge_outcome();

    assert_eq!(h.app.phase(), AppPhase::Results);
    let boards = h.display.leaderboards();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].len(), 5);
    assert_eq!(boards[0][0].rank, 1);
    assert_eq!(boards[0][0].score, 600);
}

#[tokio::test]
async fn test_restart_returns_to_name_entry() {
    let mut h = harness();
    h.app.start_game("Alice", faces()).unwrap();
    assert_eq!(h.app.phase(), AppPhase::Playing);

    h.app.restart();

    assert_eq!(h.app.phase(), AppPhase::NameEntry);
    assert!(h.app.session().is_none());
}

#[tokio::test]
async fn test_flip_without_a_round_is_a_noop() {
    let mut h = harness();
    let outcome = h.app.flip(mixmatch::CardId(0)).unwrap();
    assert_eq!(outcome, mixmatch::FlipOutcome::Rejected);
}
