//! Drag feedback and the settle/exit motions that follow a decision.
//!
//! Feedback is a pure function of the live offset and is recomputed on every
//! frame while the card moves. Motions are frame-driven: the deck advances them
//! from its `tick` and reads back the new offset.

use std::time::Duration;

use swipedeck_types::{
    AnimPhase, EffectTimer, FeedbackTuning, MotionTuning, SwipeDirection, Viewport,
};

/// Visual state derived from the live offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFeedback {
    pub offset: f64,
    pub rotation_deg: f64,
    pub accept_label_opacity: f64,
    pub reject_label_opacity: f64,
}

impl CardFeedback {
    pub const REST: Self = Self {
        offset: 0.0,
        rotation_deg: 0.0,
        accept_label_opacity: 0.0,
        reject_label_opacity: 0.0,
    };
}

/// Piecewise-linear interpolation with clamping at both ends.
///
/// `input` must be non-decreasing and the same length as `output`.
#[must_use]
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let (Some(&first_in), Some(&last_in)) = (input.first(), input.last()) else {
        return 0.0;
    };
    if value.is_nan() {
        return output[0];
    }
    if value <= first_in {
        return output[0];
    }
    if value >= last_in {
        return output[output.len() - 1];
    }

    for (i, pair) in input.windows(2).enumerate() {
        let (lo, hi) = (pair[0], pair[1]);
        if value <= hi {
            if hi <= lo {
                return output[i + 1];
            }
            let t = (value - lo) / (hi - lo);
            return output[i] + t * (output[i + 1] - output[i]);
        }
    }
    output[output.len() - 1]
}

fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    /// Off-screen exit after an accept/reject.
    Exit(SwipeDirection),
    /// Snap back to rest after an abort.
    Return,
}

/// A timed offset animation.
#[derive(Debug, Clone)]
pub struct Motion {
    kind: MotionKind,
    from: f64,
    to: f64,
    timer: EffectTimer,
}

impl Motion {
    fn new(kind: MotionKind, from: f64, to: f64, duration: Duration) -> Self {
        Self {
            kind,
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    /// Advance by one frame and return the new offset.
    pub fn advance(&mut self, delta: Duration) -> f64 {
        self.timer.advance(delta);
        self.offset()
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        if self.timer.is_finished() {
            return self.to;
        }
        let progress = f64::from(self.timer.progress());
        let eased = match self.kind {
            MotionKind::Exit(_) => ease_in_out_quad(progress),
            MotionKind::Return => ease_out_cubic(progress),
        };
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }
}

/// Derives feedback and builds motions for one viewport.
#[derive(Debug, Clone, Copy)]
pub struct AnimationController {
    viewport: Viewport,
    position_threshold: f64,
    feedback: FeedbackTuning,
    motion: MotionTuning,
}

impl AnimationController {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        position_threshold: f64,
        feedback: FeedbackTuning,
        motion: MotionTuning,
    ) -> Self {
        Self {
            viewport,
            position_threshold,
            feedback,
            motion,
        }
    }

    #[must_use]
    pub fn feedback(&self, offset: f64) -> CardFeedback {
        let half = self.viewport.half_width();
        let max_rot = self.feedback.max_rotation_deg();
        let fade_start = self.feedback.label_fade_start();
        let threshold = self.position_threshold;

        CardFeedback {
            offset,
            rotation_deg: interpolate(offset, &[-half, 0.0, half], &[-max_rot, 0.0, max_rot]),
            accept_label_opacity: interpolate(offset, &[fade_start, threshold], &[0.0, 1.0]),
            reject_label_opacity: interpolate(offset, &[-threshold, -fade_start], &[1.0, 0.0]),
        }
    }

    #[must_use]
    pub fn exit_motion(&self, from: f64, direction: SwipeDirection) -> Motion {
        let to = direction.sign() * self.motion.exit_distance_ratio() * self.viewport.width();
        Motion::new(
            MotionKind::Exit(direction),
            from,
            to,
            self.motion.exit_duration(),
        )
    }

    #[must_use]
    pub fn return_motion(&self, from: f64) -> Motion {
        Motion::new(MotionKind::Return, from, 0.0, self.motion.return_duration())
    }
}
