//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use swipedeck_engine::{
    CardStack, DeckEvent, DeckPhase, DeckTuning, JobCard, SwipeDeck, SwipeDecision, SwipeHandler,
};

pub const WIDTH: f64 = 400.0;
pub const FRAME: Duration = Duration::from_millis(100);

/// Records every callback in call order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<String>,
}

impl SwipeHandler<JobCard> for Recorder {
    fn on_accept(&mut self, card: &JobCard) {
        self.calls.push(format!("accept:{}", card.id));
    }

    fn on_reject(&mut self, card: &JobCard) {
        self.calls.push(format!("reject:{}", card.id));
    }
}

pub type TestDeck = SwipeDeck<JobCard, Recorder>;

pub fn jobs(ids: &[&str]) -> Vec<JobCard> {
    ids.iter()
        .map(|id| JobCard::new(*id, format!("Job {id}")))
        .collect()
}

pub fn deck_with(ids: &[&str], tuning: DeckTuning) -> TestDeck {
    let stack: CardStack<JobCard> = jobs(ids).into_iter().collect();
    SwipeDeck::with_width(stack, WIDTH, tuning, Recorder::default()).unwrap()
}

pub fn deck(ids: &[&str]) -> TestDeck {
    deck_with(ids, DeckTuning::default())
}

/// Drag to `offset` in two moves and release.
pub fn drag(deck: &mut TestDeck, offset: f64, velocity: f64) -> Option<SwipeDecision> {
    if !deck.gesture_start() {
        return None;
    }
    deck.gesture_move(offset / 2.0);
    deck.gesture_move(offset);
    deck.gesture_end(offset, velocity)
}

/// Tick until no motion is running.
pub fn settle(deck: &mut TestDeck) {
    while matches!(
        deck.phase(),
        DeckPhase::AnimatingExit | DeckPhase::AnimatingReturn
    ) {
        deck.tick(FRAME);
    }
}

/// Drained events without feedback frames, one line per milestone.
pub fn trace(deck: &mut TestDeck) -> String {
    deck.drain_events()
        .iter()
        .filter_map(|event| match event {
            DeckEvent::Feedback(_) => None,
            DeckEvent::Decided { turn, decision } => Some(format!("decided #{turn} {decision}")),
            DeckEvent::ReturnStarted { turn } => Some(format!("return #{turn}")),
            DeckEvent::Returned { turn } => Some(format!("returned #{turn}")),
            DeckEvent::Resolved {
                turn,
                decision,
                next_index,
            } => Some(format!("resolved #{turn} {decision} -> {next_index}")),
            DeckEvent::Exhausted => Some("exhausted".to_string()),
            DeckEvent::TornDown => Some("torn down".to_string()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
