//! Whole-session flows through the deck state machine.

use swipedeck_engine::{DeckPhase, ManualAction, SwipeDecision};

use crate::common::{FRAME, deck, drag, settle, trace};

#[test]
fn mixed_session_milestones() {
    let mut deck = deck(&["a", "b", "c"]);

    assert_eq!(drag(&mut deck, 150.0, 0.0), Some(SwipeDecision::Accept));
    settle(&mut deck);
    assert_eq!(drag(&mut deck, 40.0, 0.0), Some(SwipeDecision::Abort));
    settle(&mut deck);
    assert!(deck.trigger(ManualAction::Reject));
    settle(&mut deck);
    assert_eq!(drag(&mut deck, -30.0, -900.0), Some(SwipeDecision::Reject));
    settle(&mut deck);

    insta::assert_snapshot!(trace(&mut deck), @r"
    decided #0 accept
    resolved #0 accept -> 1
    decided #1 abort
    return #1
    returned #1
    decided #1 reject
    resolved #1 reject -> 2
    decided #2 reject
    resolved #2 reject -> 3
    exhausted
    ");

    assert_eq!(deck.handler().calls, ["accept:a", "reject:b", "reject:c"]);
    assert_eq!(deck.phase(), DeckPhase::Exhausted);
    assert!(deck.top_card().is_none());
    assert!(!deck.gesture_start());
    assert!(!deck.trigger(ManualAction::Accept));
}

#[test]
fn teardown_during_exit_drops_the_resolution() {
    let mut deck = deck(&["a", "b"]);
    drag(&mut deck, 180.0, 0.0);
    deck.tick(FRAME);

    deck.teardown();
    for _ in 0..10 {
        deck.tick(FRAME);
    }

    insta::assert_snapshot!(trace(&mut deck), @r"
    decided #0 accept
    torn down
    ");
    assert!(deck.handler().calls.is_empty());
    assert_eq!(deck.current_index(), 0);
    assert!(deck.top_card().is_none());
}

#[test]
fn rapid_manual_triggers_resolve_one_card_each() {
    let mut deck = deck(&["a", "b", "c"]);

    assert!(deck.trigger(ManualAction::Accept));
    assert!(!deck.trigger(ManualAction::Accept));
    assert!(!deck.trigger(ManualAction::Reject));
    settle(&mut deck);

    assert_eq!(deck.handler().calls, ["accept:a"]);
    assert_eq!(deck.current_index(), 1);
}

#[test]
fn next_card_tracks_the_stack() {
    let mut deck = deck(&["a", "b"]);
    assert_eq!(deck.next_card().map(|c| c.id.as_str()), Some("b"));

    deck.trigger(ManualAction::Reject);
    settle(&mut deck);

    assert_eq!(deck.top_card().map(|c| c.id.as_str()), Some("b"));
    assert!(deck.next_card().is_none());
}

#[test]
fn feedback_follows_the_drag() {
    let mut deck = deck(&["a"]);
    assert!(deck.gesture_start());
    deck.gesture_move(100.0);

    let feedback = deck.feedback();
    assert!((feedback.rotation_deg - 5.0).abs() < 1e-9);
    assert!((feedback.accept_label_opacity - 1.0).abs() < 1e-9);
    assert!(feedback.reject_label_opacity.abs() < 1e-9);

    deck.gesture_move(-100.0);
    let feedback = deck.feedback();
    assert!((feedback.rotation_deg + 5.0).abs() < 1e-9);
    assert!(feedback.accept_label_opacity.abs() < 1e-9);
    assert!((feedback.reject_label_opacity - 1.0).abs() < 1e-9);
}
