//! Core domain types for Swipedeck.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod animation;
mod decision;
mod gesture;
mod ids;
mod job;
mod tuning;
mod viewport;

pub use animation::{AnimPhase, EffectTimer, normalized_progress};
pub use decision::{SwipeDecision, SwipeDirection, SwipeOutcome};
pub use gesture::GestureState;
pub use ids::{TurnId, TurnToken};
pub use job::{CreatedAt, JobCard};
pub use tuning::{DecisionTuning, FeedbackTuning, MotionTuning, TuningError};
pub use viewport::{Viewport, ViewportError};

/// A swipeable card.
///
/// The engine treats cards as immutable values. Identity is the only thing it
/// reads; every other field belongs to the rendering layer and the callbacks.
pub trait Card {
    fn card_id(&self) -> &str;
}

impl<C: Card + ?Sized> Card for &C {
    fn card_id(&self) -> &str {
        (**self).card_id()
    }
}
