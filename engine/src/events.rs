//! Deck state changes published to the rendering layer.

use swipedeck_types::{SwipeDecision, TurnId};

use crate::animation::CardFeedback;

/// A state change the rendering layer reacts to.
///
/// This is a closed set: drag feedback, the single decision of a turn, the
/// return/exit lifecycle and the terminal stack conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckEvent {
    /// Live offset changed (drag or motion frame).
    Feedback(CardFeedback),
    /// A released gesture or manual action was evaluated.
    Decided {
        turn: TurnId,
        decision: SwipeDecision,
    },
    ReturnStarted { turn: TurnId },
    /// The aborted card is back at rest and accepts gestures again.
    Returned { turn: TurnId },
    /// Callbacks ran and the stack advanced to `next_index`.
    Resolved {
        turn: TurnId,
        decision: SwipeDecision,
        next_index: usize,
    },
    /// No card remains interactive. Emitted once per deck.
    Exhausted,
    /// The host tore the deck down; nothing further is emitted.
    TornDown,
}

/// Events accumulate here and are drained by the host after each input or frame.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<DeckEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DeckEvent) {
        // Consecutive feedback frames collapse to the latest one.
        if let DeckEvent::Feedback(next) = &event
            && let Some(DeckEvent::Feedback(last)) = self.pending.last_mut()
        {
            *last = *next;
            return;
        }
        self.pending.push(event);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> Vec<DeckEvent> {
        std::mem::take(&mut self.pending)
    }
}
