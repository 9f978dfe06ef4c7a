//! Release velocity estimation for hosts that only observe positions.

use std::collections::VecDeque;
use std::time::Duration;

const HISTORY_WINDOW: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
struct Sample {
    delta: f64,
    at: Duration,
}

/// Sliding-window velocity estimate over recent drag deltas.
#[derive(Debug, Default, Clone)]
pub struct VelocityEstimator {
    history: VecDeque<Sample>,
}

impl VelocityEstimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement of `delta` units observed at `at` since gesture start.
    ///
    /// Samples older than the newest recorded one are dropped.
    pub fn record(&mut self, delta: f64, at: Duration) {
        if self.history.back().is_some_and(|last| at < last.at) {
            tracing::trace!(?at, "dropping out-of-order velocity sample");
            return;
        }

        self.history.push_back(Sample { delta, at });

        while let Some(first) = self.history.front() {
            if at <= first.at + HISTORY_WINDOW {
                break;
            }
            self.history.pop_front();
        }
    }

    /// Units per second across the window; 0 when it spans no time.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        let (Some(first), Some(last)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };

        let span = (last.at - first.at).as_secs_f64();
        if span == 0.0 {
            return 0.0;
        }

        self.history.iter().map(|s| s.delta).sum::<f64>() / span
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}
