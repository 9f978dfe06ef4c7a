//! Baseline-relative tracking of a single horizontal drag.

use swipedeck_types::GestureState;

/// Final reading handed to the decision engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRelease {
    pub offset: f64,
    pub velocity: f64,
}

/// Normalizes drag deltas into [`GestureState`] updates.
///
/// Accepts any value verbatim; range handling belongs to the decision engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    /// Begin a gesture at the card's current resting offset.
    #[must_use]
    pub const fn start(rest_offset: f64) -> Self {
        Self {
            state: GestureState::starting_at(rest_offset),
        }
    }

    /// Apply a delta measured from the gesture start. Returns the live offset.
    pub fn update(&mut self, delta_from_start: f64) -> f64 {
        self.state.live_offset = self.state.origin_offset + delta_from_start;
        self.state.live_offset
    }

    /// Finish the gesture, discarding its state.
    #[must_use]
    pub fn finish(mut self, final_delta_from_start: f64, final_velocity: f64) -> GestureRelease {
        self.update(final_delta_from_start);
        self.state.live_velocity = final_velocity;
        GestureRelease {
            offset: self.state.live_offset,
            velocity: self.state.live_velocity,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub const fn live_offset(&self) -> f64 {
        self.state.live_offset
    }
}
