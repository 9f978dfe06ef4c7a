//! Swipe decision engine for Swipedeck.
//!
//! Turns a one-dimensional drag signal into accept/reject decisions for a
//! stack of cards, with real-time visual feedback and a strict notification
//! order once a card leaves the screen.
//!
//! # Architecture
//!
//! ```text
//! drag events -> GestureTracker -> AnimationController (feedback)
//!             -> gesture end -> DecisionEngine (once)
//!             -> AnimationController (exit | return motion, via tick)
//!             -> exit complete -> Dispatcher -> CardStack::advance
//! ```
//!
//! [`SwipeDeck`] owns every piece and is the only entry point a host needs.
//! [`DecisionEngine`] is pure and usable on its own.

mod animation;
mod decision;
mod deck;
mod dispatch;
mod events;
mod gesture;
mod stack;
mod velocity;

pub use animation::{AnimationController, CardFeedback, Motion, MotionKind, interpolate};
pub use decision::{DecisionEngine, decide};
pub use deck::{DeckError, DeckPhase, DeckTuning, ManualAction, SwipeDeck};
pub use dispatch::SwipeHandler;
pub use events::{DeckEvent, EventQueue};
pub use gesture::{GestureRelease, GestureTracker};
pub use stack::CardStack;
pub use velocity::VelocityEstimator;

pub use swipedeck_types::{
    Card, JobCard, SwipeDecision, SwipeDirection, SwipeOutcome, TurnId, Viewport,
};
