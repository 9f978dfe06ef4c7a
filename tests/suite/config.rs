//! Config files feeding deck construction.

use std::io::Write;
use std::time::Duration;

use swipedeck_config::{ConfigError, SwipedeckConfig};
use swipedeck_engine::{
    CardStack, DeckError, DeckTuning, JobCard, ManualAction, SwipeDeck, SwipeDecision,
};

use crate::common::{Recorder, WIDTH, deck_with, drag, jobs, settle};

fn load(content: &str) -> Result<SwipedeckConfig, ConfigError> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    SwipedeckConfig::load_from(file.path())
}

fn tuning(config: &SwipedeckConfig) -> DeckTuning {
    DeckTuning {
        decision: config.decision,
        feedback: config.feedback,
        motion: config.motion,
    }
}

#[test]
fn raised_position_threshold_turns_an_accept_into_an_abort() {
    let config = load("[decision]\nposition_threshold_ratio = 0.5\n").unwrap();
    let mut deck = deck_with(&["a"], tuning(&config));

    assert!((deck.decision_engine().position_threshold() - 200.0).abs() < 1e-9);
    assert_eq!(drag(&mut deck, 150.0, 0.0), Some(SwipeDecision::Abort));
}

#[test]
fn exit_duration_controls_when_callbacks_fire() {
    let config = load("[motion]\nexit_duration_ms = 50\n").unwrap();
    let mut deck = deck_with(&["a", "b"], tuning(&config));

    assert!(deck.trigger(ManualAction::Accept));
    deck.tick(Duration::from_millis(50));
    assert_eq!(deck.handler().calls, ["accept:a"]);
}

#[test]
fn label_fade_start_past_threshold_is_rejected_by_the_deck() {
    let config = load("[feedback]\nlabel_fade_start = 150.0\n").unwrap();
    let stack: CardStack<JobCard> = jobs(&["a"]).into_iter().collect();

    let err = SwipeDeck::with_width(stack, WIDTH, tuning(&config), Recorder::default())
        .unwrap_err();
    assert!(matches!(err, DeckError::LabelFadeRange { .. }));
}

#[test]
fn replay_section_sets_frame_and_viewport() {
    let config = load("[replay]\nframe_interval_ms = 16\nviewport_width = 320.0\n").unwrap();
    assert_eq!(config.replay.frame_interval, Duration::from_millis(16));
    assert!((config.replay.viewport.width() - 320.0).abs() < 1e-9);
}

#[test]
fn invalid_values_name_the_file() {
    let err = load("[decision]\nvelocity_threshold = -1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().starts_with("invalid config at "));
}

#[test]
fn default_config_matches_default_tuning() {
    let config = load("").unwrap();
    let mut deck = deck_with(&["a"], tuning(&config));

    assert_eq!(tuning(&config), DeckTuning::default());
    assert_eq!(drag(&mut deck, -120.0, 0.0), Some(SwipeDecision::Reject));
    settle(&mut deck);
    assert_eq!(deck.handler().calls, ["reject:a"]);
}
