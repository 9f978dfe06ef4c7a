//! Turn state machine for the interactive top card.
//!
//! ```text
//! Idle -> Dragging -> (decide) -> AnimatingExit   -> (dispatch, advance) -> Idle (next card)
//!                              \-> AnimatingReturn -> Idle (same card)
//! ```
//!
//! Deciding and resolving are instantaneous transitions inside
//! [`SwipeDeck::gesture_end`]/[`SwipeDeck::trigger`] and [`SwipeDeck::tick`];
//! they are logged and published as events, never stored as resting phases.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use swipedeck_types::{
    Card, DecisionTuning, FeedbackTuning, MotionTuning, SwipeDecision, TurnId, TurnToken,
    Viewport, ViewportError,
};

use crate::animation::{AnimationController, CardFeedback, Motion};
use crate::decision::DecisionEngine;
use crate::dispatch::{Dispatcher, SwipeHandler};
use crate::events::{DeckEvent, EventQueue};
use crate::gesture::GestureTracker;
use crate::stack::CardStack;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DeckError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error("label fade start ({fade_start}) must be below the position threshold ({threshold})")]
    LabelFadeRange { fade_start: f64, threshold: f64 },
}

/// All tuning a deck is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeckTuning {
    pub decision: DecisionTuning,
    pub feedback: FeedbackTuning,
    pub motion: MotionTuning,
}

/// Explicit accept/reject control, bypassing the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualAction {
    Accept,
    Reject,
}

impl ManualAction {
    #[must_use]
    pub const fn decision(self) -> SwipeDecision {
        match self {
            Self::Accept => SwipeDecision::Accept,
            Self::Reject => SwipeDecision::Reject,
        }
    }
}

/// Observable phase of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Idle,
    Dragging,
    AnimatingExit,
    AnimatingReturn,
    /// Every card resolved; nothing is interactive.
    Exhausted,
    /// The host tore the deck down; all input is ignored.
    TornDown,
}

#[derive(Debug)]
enum TurnPhase {
    Idle,
    Dragging(GestureTracker),
    AnimatingExit {
        decision: SwipeDecision,
        motion: Motion,
        token: TurnToken,
    },
    AnimatingReturn(Motion),
}

/// Owns the card stack and drives one turn at a time for its top card.
#[derive(Debug)]
pub struct SwipeDeck<C, H> {
    stack: CardStack<C>,
    handler: H,
    decision: DecisionEngine,
    animation: AnimationController,
    phase: TurnPhase,
    live_offset: f64,
    turn: TurnId,
    generation: u64,
    /// Token of the exit motion currently allowed to dispatch.
    active: Option<TurnToken>,
    torn_down: bool,
    events: EventQueue,
}

impl<C, H> SwipeDeck<C, H>
where
    C: Card,
    H: SwipeHandler<C>,
{
    pub fn new(
        stack: CardStack<C>,
        viewport: Viewport,
        tuning: DeckTuning,
        handler: H,
    ) -> Result<Self, DeckError> {
        let decision = DecisionEngine::new(viewport, tuning.decision);
        let threshold = decision.position_threshold();
        let fade_start = tuning.feedback.label_fade_start();
        if fade_start >= threshold {
            return Err(DeckError::LabelFadeRange {
                fade_start,
                threshold,
            });
        }

        let animation =
            AnimationController::new(viewport, threshold, tuning.feedback, tuning.motion);

        let mut events = EventQueue::new();
        if stack.is_exhausted() {
            events.push(DeckEvent::Exhausted);
        }

        debug!(
            cards = stack.len(),
            width = viewport.width(),
            threshold,
            "deck ready"
        );

        Ok(Self {
            stack,
            handler,
            decision,
            animation,
            phase: TurnPhase::Idle,
            live_offset: 0.0,
            turn: TurnId::new(0),
            generation: 0,
            active: None,
            torn_down: false,
            events,
        })
    }

    pub fn with_width(
        stack: CardStack<C>,
        viewport_width: f64,
        tuning: DeckTuning,
        handler: H,
    ) -> Result<Self, DeckError> {
        Self::new(stack, Viewport::new(viewport_width)?, tuning, handler)
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Begin dragging the top card. Interrupts a return-to-rest in progress.
    pub fn gesture_start(&mut self) -> bool {
        if !self.accepts_input() {
            debug!(phase = ?self.phase(), "ignoring gesture start");
            return false;
        }
        match self.phase {
            TurnPhase::Idle | TurnPhase::AnimatingReturn(_) => {
                self.phase = TurnPhase::Dragging(GestureTracker::start(self.live_offset));
                true
            }
            TurnPhase::Dragging(_) | TurnPhase::AnimatingExit { .. } => {
                debug!(turn = %self.turn, phase = ?self.phase(), "ignoring gesture start");
                false
            }
        }
    }

    /// Update the drag with a delta measured from the gesture start.
    pub fn gesture_move(&mut self, delta_from_start: f64) -> bool {
        if self.torn_down {
            return false;
        }
        let TurnPhase::Dragging(tracker) = &mut self.phase else {
            return false;
        };
        self.live_offset = tracker.update(delta_from_start);
        self.publish_feedback();
        true
    }

    /// Release the drag and evaluate it exactly once.
    ///
    /// Returns the decision, or `None` when no drag was active.
    pub fn gesture_end(
        &mut self,
        final_delta_from_start: f64,
        final_velocity: f64,
    ) -> Option<SwipeDecision> {
        if self.torn_down {
            return None;
        }
        let tracker = match std::mem::replace(&mut self.phase, TurnPhase::Idle) {
            TurnPhase::Dragging(tracker) => tracker,
            other => {
                self.phase = other;
                return None;
            }
        };

        let release = tracker.finish(final_delta_from_start, final_velocity);
        // A non-finite release leaves the card where it last was.
        if release.offset.is_finite() {
            self.live_offset = release.offset;
        }

        let decision = self.decision.decide(release.offset, release.velocity);
        debug!(
            turn = %self.turn,
            offset = release.offset,
            velocity = release.velocity,
            %decision,
            "gesture decided"
        );
        self.begin_settle(decision);
        Some(decision)
    }

    /// Resolve the top card without a drag.
    ///
    /// Runs the same exit motion and dispatch as a decided gesture. Ignored
    /// unless the turn is idle, so a second trigger while a turn is animating
    /// cannot resolve the card twice.
    pub fn trigger(&mut self, action: ManualAction) -> bool {
        if !self.accepts_input() {
            debug!(?action, phase = ?self.phase(), "ignoring manual action");
            return false;
        }
        if !matches!(self.phase, TurnPhase::Idle) {
            debug!(
                turn = %self.turn,
                ?action,
                phase = ?self.phase(),
                "ignoring manual action while turn is busy"
            );
            return false;
        }

        let decision = action.decision();
        debug!(turn = %self.turn, %decision, "manual decision");
        self.begin_settle(decision);
        true
    }

    /// Advance the active motion by one frame.
    ///
    /// A finishing exit motion dispatches the callbacks and advances the stack
    /// within this call.
    pub fn tick(&mut self, delta: Duration) {
        if self.torn_down {
            return;
        }
        let (offset, finished) = match &mut self.phase {
            TurnPhase::AnimatingExit { motion, .. } | TurnPhase::AnimatingReturn(motion) => {
                let offset = motion.advance(delta);
                (offset, motion.is_finished())
            }
            TurnPhase::Idle | TurnPhase::Dragging(_) => return,
        };

        self.live_offset = offset;
        self.publish_feedback();
        if finished {
            self.finish_motion();
        }
    }

    /// Tear the deck down. In-flight motions are dropped and no callback or
    /// index change happens afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if !matches!(self.phase, TurnPhase::Idle) {
            info!(turn = %self.turn, phase = ?self.phase(), "tearing down with an active turn");
        }
        self.torn_down = true;
        self.generation = self.generation.wrapping_add(1);
        self.active = None;
        self.phase = TurnPhase::Idle;
        self.events.push(DeckEvent::TornDown);
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn accepts_input(&self) -> bool {
        !self.torn_down && !self.stack.is_exhausted()
    }

    fn begin_settle(&mut self, decision: SwipeDecision) {
        self.events.push(DeckEvent::Decided {
            turn: self.turn,
            decision,
        });

        match decision.direction() {
            Some(direction) => {
                let token = TurnToken::new(self.turn, self.generation);
                self.active = Some(token);
                self.phase = TurnPhase::AnimatingExit {
                    decision,
                    motion: self.animation.exit_motion(self.live_offset, direction),
                    token,
                };
            }
            None => {
                let motion = self.animation.return_motion(self.live_offset);
                self.phase = TurnPhase::AnimatingReturn(motion);
                self.events.push(DeckEvent::ReturnStarted { turn: self.turn });
            }
        }
    }

    fn finish_motion(&mut self) {
        match std::mem::replace(&mut self.phase, TurnPhase::Idle) {
            TurnPhase::AnimatingReturn(_) => {
                self.live_offset = 0.0;
                self.events.push(DeckEvent::Returned { turn: self.turn });
            }
            TurnPhase::AnimatingExit {
                decision, token, ..
            } => self.complete_exit(decision, token),
            other => self.phase = other,
        }
    }

    fn complete_exit(&mut self, decision: SwipeDecision, token: TurnToken) {
        if self.torn_down || self.active != Some(token) {
            debug!(%token, "dropping stale exit completion");
            return;
        }
        self.active = None;

        let Some(resolution) = Dispatcher::dispatch(&mut self.stack, decision, &mut self.handler)
        else {
            return;
        };

        self.events.push(DeckEvent::Resolved {
            turn: self.turn,
            decision,
            next_index: resolution.next_index,
        });
        debug!(
            turn = %self.turn,
            %decision,
            index = resolution.resolved_index,
            next = resolution.next_index,
            "turn resolved"
        );

        self.turn = self.turn.next();
        self.live_offset = 0.0;

        if self.stack.is_exhausted() {
            debug!(cards = self.stack.len(), "deck exhausted");
            self.events.push(DeckEvent::Exhausted);
        } else {
            self.publish_feedback();
        }
    }

    fn publish_feedback(&mut self) {
        let feedback = self.animation.feedback(self.live_offset);
        self.events.push(DeckEvent::Feedback(feedback));
    }

    // ------------------------------------------------------------------
    // Read-only state
    // ------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> DeckPhase {
        if self.torn_down {
            return DeckPhase::TornDown;
        }
        if self.stack.is_exhausted() {
            return DeckPhase::Exhausted;
        }
        match self.phase {
            TurnPhase::Idle => DeckPhase::Idle,
            TurnPhase::Dragging(_) => DeckPhase::Dragging,
            TurnPhase::AnimatingExit { .. } => DeckPhase::AnimatingExit,
            TurnPhase::AnimatingReturn(_) => DeckPhase::AnimatingReturn,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_exhausted()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The interactive card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<&C> {
        if self.torn_down {
            return None;
        }
        self.stack.current()
    }

    /// The non-interactive card rendered beneath the top card.
    #[must_use]
    pub fn next_card(&self) -> Option<&C> {
        if self.torn_down {
            return None;
        }
        self.stack.next_up()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.stack.current_index()
    }

    #[must_use]
    pub fn live_offset(&self) -> f64 {
        self.live_offset
    }

    #[must_use]
    pub fn feedback(&self) -> CardFeedback {
        self.animation.feedback(self.live_offset)
    }

    #[must_use]
    pub fn turn(&self) -> TurnId {
        self.turn
    }

    #[must_use]
    pub fn stack(&self) -> &CardStack<C> {
        &self.stack
    }

    #[must_use]
    pub fn decision_engine(&self) -> &DecisionEngine {
        &self.decision
    }

    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn drain_events(&mut self) -> Vec<DeckEvent> {
        self.events.drain()
    }

    #[must_use]
    pub fn into_handler(self) -> H {
        self.handler
    }
}
