//! Pure mapping from a released drag to a swipe decision.

use swipedeck_types::{DecisionTuning, SwipeDecision, Viewport};

/// Evaluates released gestures against viewport-relative thresholds.
///
/// Evaluation is synchronous, deterministic and total: every input, including
/// non-finite ones, yields exactly one decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionEngine {
    position_threshold: f64,
    velocity_threshold: f64,
    min_intent_velocity: f64,
}

impl DecisionEngine {
    #[must_use]
    pub fn new(viewport: Viewport, tuning: DecisionTuning) -> Self {
        Self {
            position_threshold: viewport.width() * tuning.position_threshold_ratio(),
            velocity_threshold: tuning.velocity_threshold(),
            min_intent_velocity: tuning.min_intent_velocity(),
        }
    }

    #[must_use]
    pub const fn position_threshold(&self) -> f64 {
        self.position_threshold
    }

    #[must_use]
    pub fn decide(&self, offset: f64, velocity: f64) -> SwipeDecision {
        if !offset.is_finite() || !velocity.is_finite() {
            return SwipeDecision::Abort;
        }

        let speed = velocity.abs();
        if speed < self.velocity_threshold && offset.abs() < self.position_threshold {
            return SwipeDecision::Abort;
        }

        // Faster releases need more travel to count on position alone.
        let dynamic_threshold = self
            .position_threshold
            .max(self.position_threshold * 0.5 + speed * 0.1);

        if offset > dynamic_threshold || (velocity > self.min_intent_velocity && offset > 0.0) {
            SwipeDecision::Accept
        } else if offset < -dynamic_threshold
            || (velocity < -self.min_intent_velocity && offset < 0.0)
        {
            SwipeDecision::Reject
        } else {
            SwipeDecision::Abort
        }
    }
}

/// One-shot evaluation with default tuning.
///
/// An unusable viewport width aborts, same as non-finite gesture input.
#[must_use]
pub fn decide(offset: f64, velocity: f64, viewport_width: f64) -> SwipeDecision {
    match Viewport::new(viewport_width) {
        Ok(viewport) => {
            DecisionEngine::new(viewport, DecisionTuning::default()).decide(offset, velocity)
        }
        Err(_) => SwipeDecision::Abort,
    }
}
