//! Validated tuning for the swipe engine.
//!
//! These types guarantee usable thresholds and timings by construction. Raw
//! config values are resolved into them at the parse boundary; the engine
//! never re-validates.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must be finite and positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite and non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },
}

fn positive(field: &'static str, value: f64) -> Result<f64, TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TuningError::Negative { field, value })
    }
}

/// Thresholds for turning a released drag into a decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionTuning {
    position_threshold_ratio: f64,
    velocity_threshold: f64,
    min_intent_velocity: f64,
}

impl DecisionTuning {
    pub const DEFAULT_POSITION_THRESHOLD_RATIO: f64 = 0.25;
    pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 500.0;
    pub const DEFAULT_MIN_INTENT_VELOCITY: f64 = 500.0;

    pub fn new(
        position_threshold_ratio: f64,
        velocity_threshold: f64,
        min_intent_velocity: f64,
    ) -> Result<Self, TuningError> {
        Ok(Self {
            position_threshold_ratio: positive(
                "position_threshold_ratio",
                position_threshold_ratio,
            )?,
            velocity_threshold: positive("velocity_threshold", velocity_threshold)?,
            min_intent_velocity: positive("min_intent_velocity", min_intent_velocity)?,
        })
    }

    /// Fraction of the viewport width a drag must cover on its own.
    #[must_use]
    pub const fn position_threshold_ratio(self) -> f64 {
        self.position_threshold_ratio
    }

    /// Speed (units per second) below which a short drag is always aborted.
    #[must_use]
    pub const fn velocity_threshold(self) -> f64 {
        self.velocity_threshold
    }

    /// Speed at which a same-signed flick decides regardless of distance.
    #[must_use]
    pub const fn min_intent_velocity(self) -> f64 {
        self.min_intent_velocity
    }
}

impl Default for DecisionTuning {
    fn default() -> Self {
        Self {
            position_threshold_ratio: Self::DEFAULT_POSITION_THRESHOLD_RATIO,
            velocity_threshold: Self::DEFAULT_VELOCITY_THRESHOLD,
            min_intent_velocity: Self::DEFAULT_MIN_INTENT_VELOCITY,
        }
    }
}

/// Continuous drag feedback: card tilt and label fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackTuning {
    max_rotation_deg: f64,
    label_fade_start: f64,
}

impl FeedbackTuning {
    pub const DEFAULT_MAX_ROTATION_DEG: f64 = 10.0;
    pub const DEFAULT_LABEL_FADE_START: f64 = 20.0;

    pub fn new(max_rotation_deg: f64, label_fade_start: f64) -> Result<Self, TuningError> {
        Ok(Self {
            max_rotation_deg: non_negative("max_rotation_deg", max_rotation_deg)?,
            label_fade_start: non_negative("label_fade_start", label_fade_start)?,
        })
    }

    /// Tilt reached at half a viewport of travel.
    #[must_use]
    pub const fn max_rotation_deg(self) -> f64 {
        self.max_rotation_deg
    }

    /// Offset at which the accept/reject labels start to appear.
    #[must_use]
    pub const fn label_fade_start(self) -> f64 {
        self.label_fade_start
    }
}

impl Default for FeedbackTuning {
    fn default() -> Self {
        Self {
            max_rotation_deg: Self::DEFAULT_MAX_ROTATION_DEG,
            label_fade_start: Self::DEFAULT_LABEL_FADE_START,
        }
    }
}

/// Exit and return motion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTuning {
    exit_distance_ratio: f64,
    exit_duration: Duration,
    return_duration: Duration,
}

impl MotionTuning {
    pub const DEFAULT_EXIT_DISTANCE_RATIO: f64 = 1.5;
    pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(300);
    pub const DEFAULT_RETURN_DURATION: Duration = Duration::from_millis(250);

    pub fn new(
        exit_distance_ratio: f64,
        exit_duration: Duration,
        return_duration: Duration,
    ) -> Result<Self, TuningError> {
        Ok(Self {
            exit_distance_ratio: positive("exit_distance_ratio", exit_distance_ratio)?,
            exit_duration,
            return_duration,
        })
    }

    /// Exit target as a multiple of the viewport width.
    #[must_use]
    pub const fn exit_distance_ratio(self) -> f64 {
        self.exit_distance_ratio
    }

    #[must_use]
    pub const fn exit_duration(self) -> Duration {
        self.exit_duration
    }

    #[must_use]
    pub const fn return_duration(self) -> Duration {
        self.return_duration
    }
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            exit_distance_ratio: Self::DEFAULT_EXIT_DISTANCE_RATIO,
            exit_duration: Self::DEFAULT_EXIT_DURATION,
            return_duration: Self::DEFAULT_RETURN_DURATION,
        }
    }
}
