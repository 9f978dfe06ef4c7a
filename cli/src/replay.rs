//! Scripted input replay.
//!
//! A script is a list of `[[step]]` tables. Drags feed one offset per frame;
//! every motion the deck starts is then ticked to completion before the next
//! step runs.
//!
//! ```toml
//! [[step]]
//! action = "drag"
//! path = [30.0, 80.0, 140.0]
//!
//! [[step]]
//! action = "reject"
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::time::{Interval, MissedTickBehavior};

use swipedeck_engine::{
    Card, DeckEvent, DeckPhase, ManualAction, SwipeDeck, SwipeDecision, SwipeHandler,
    VelocityEstimator,
};

const MIN_FRAME: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid replay script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Offsets from the gesture start, one per frame. Without an explicit
    /// `velocity` the release velocity is estimated from the path.
    Drag {
        path: Vec<f64>,
        #[serde(default)]
        velocity: Option<f64>,
    },
    Accept,
    Reject,
    Wait {
        ms: u64,
    },
    Teardown,
}

/// How frames are paced while replaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Advance time as fast as possible.
    #[default]
    Simulated,
    /// Wait one real frame interval between frames.
    Realtime,
}

/// Counts gathered from the deck's events during a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub steps: usize,
    pub ignored: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub aborted: usize,
    pub resolved: usize,
    pub exhausted: bool,
    pub torn_down: bool,
    pub final_index: usize,
    pub total: usize,
}

impl ReplayReport {
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.final_index)
    }

    fn record(&mut self, event: &DeckEvent) {
        match event {
            DeckEvent::Decided { decision, .. } => match decision {
                SwipeDecision::Accept => self.accepted += 1,
                SwipeDecision::Reject => self.rejected += 1,
                SwipeDecision::Abort => self.aborted += 1,
            },
            DeckEvent::Resolved { .. } => self.resolved += 1,
            DeckEvent::Exhausted => self.exhausted = true,
            DeckEvent::TornDown => self.torn_down = true,
            DeckEvent::Feedback(_)
            | DeckEvent::ReturnStarted { .. }
            | DeckEvent::Returned { .. } => {}
        }
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |flag: bool| if flag { "yes" } else { "no" };
        writeln!(f, "steps:     {} ({} ignored)", self.steps, self.ignored)?;
        writeln!(
            f,
            "decided:   {} accept, {} reject, {} abort",
            self.accepted, self.rejected, self.aborted
        )?;
        writeln!(f, "resolved:  {}", self.resolved)?;
        writeln!(
            f,
            "position:  {}/{} ({} remaining)",
            self.final_index,
            self.total,
            self.remaining()
        )?;
        writeln!(f, "exhausted: {}", yes_no(self.exhausted))?;
        write!(f, "torn down: {}", yes_no(self.torn_down))
    }
}

/// Drives a deck through a script.
pub struct Replayer<'a, C, H> {
    deck: &'a mut SwipeDeck<C, H>,
    frame: Duration,
    clock: Option<Interval>,
    report: ReplayReport,
}

impl<'a, C, H> Replayer<'a, C, H>
where
    C: Card,
    H: SwipeHandler<C>,
{
    pub fn new(deck: &'a mut SwipeDeck<C, H>, frame: Duration, pacing: Pacing) -> Self {
        let frame = frame.max(MIN_FRAME);
        let clock = match pacing {
            Pacing::Simulated => None,
            Pacing::Realtime => {
                let mut interval = tokio::time::interval(frame);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Some(interval)
            }
        };
        Self {
            deck,
            frame,
            clock,
            report: ReplayReport::default(),
        }
    }

    pub async fn run(mut self, script: &Script) -> ReplayReport {
        self.collect_events();

        for (index, step) in script.steps.iter().enumerate() {
            self.report.steps += 1;
            let applied = self.apply(step).await;
            if !applied {
                tracing::debug!(index, ?step, "step ignored");
                self.report.ignored += 1;
            }
            self.collect_events();

            if self.deck.is_torn_down() {
                let skipped = script.steps.len() - index - 1;
                if skipped > 0 {
                    tracing::info!(skipped, "deck torn down; skipping remaining steps");
                }
                break;
            }
        }

        self.report.final_index = self.deck.current_index();
        self.report.total = self.deck.stack().len();
        self.report
    }

    async fn apply(&mut self, step: &Step) -> bool {
        match step {
            Step::Drag { path, velocity } => self.drag(path, *velocity).await,
            Step::Accept => self.manual(ManualAction::Accept).await,
            Step::Reject => self.manual(ManualAction::Reject).await,
            Step::Wait { ms } => {
                self.wait(Duration::from_millis(*ms)).await;
                true
            }
            Step::Teardown => {
                self.deck.teardown();
                true
            }
        }
    }

    async fn drag(&mut self, path: &[f64], velocity: Option<f64>) -> bool {
        if !self.deck.gesture_start() {
            return false;
        }

        let mut estimator = VelocityEstimator::new();
        let mut previous = 0.0;
        for (i, &offset) in path.iter().enumerate() {
            self.next_frame().await;
            self.deck.gesture_move(offset);
            estimator.record(offset - previous, self.frame * (i as u32 + 1));
            previous = offset;
        }

        let release_velocity = velocity.unwrap_or_else(|| estimator.velocity());
        self.deck.gesture_end(previous, release_velocity);
        self.settle().await;
        true
    }

    async fn manual(&mut self, action: ManualAction) -> bool {
        if !self.deck.trigger(action) {
            return false;
        }
        self.settle().await;
        true
    }

    async fn wait(&mut self, duration: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < duration {
            self.next_frame().await;
            self.deck.tick(self.frame);
            elapsed += self.frame;
        }
    }

    /// Tick until no motion is running.
    async fn settle(&mut self) {
        while matches!(
            self.deck.phase(),
            DeckPhase::AnimatingExit | DeckPhase::AnimatingReturn
        ) {
            self.next_frame().await;
            self.deck.tick(self.frame);
        }
    }

    async fn next_frame(&mut self) {
        if let Some(clock) = &mut self.clock {
            clock.tick().await;
        }
    }

    fn collect_events(&mut self) {
        for event in self.deck.drain_events() {
            if !matches!(event, DeckEvent::Feedback(_)) {
                tracing::debug!(?event, "deck event");
            }
            self.report.record(&event);
        }
    }
}
