//! Configuration loading for Swipedeck.
//!
//! Raw TOML structs (every field optional) stay private to this crate and are
//! resolved into the validated tuning types from `swipedeck-types` at the
//! parse boundary. A missing file means defaults.
//!
//! ```toml
//! [decision]
//! position_threshold_ratio = 0.25
//! velocity_threshold = 500.0
//! min_intent_velocity = 500.0
//!
//! [feedback]
//! max_rotation_deg = 10.0
//! label_fade_start = 20.0
//!
//! [motion]
//! exit_distance_ratio = 1.5
//! exit_duration_ms = 300
//! return_duration_ms = 250
//!
//! [replay]
//! frame_interval_ms = 8
//! viewport_width = 400.0
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use swipedeck_types::{DecisionTuning, FeedbackTuning, MotionTuning, TuningError, Viewport};

pub const CONFIG_ENV_VAR: &str = "SWIPEDECK_CONFIG";

const DEFAULT_FRAME_INTERVAL_MS: u64 = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    decision: Option<RawDecision>,
    feedback: Option<RawFeedback>,
    motion: Option<RawMotion>,
    replay: Option<RawReplay>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDecision {
    position_threshold_ratio: Option<f64>,
    velocity_threshold: Option<f64>,
    min_intent_velocity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFeedback {
    max_rotation_deg: Option<f64>,
    label_fade_start: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMotion {
    exit_distance_ratio: Option<f64>,
    exit_duration_ms: Option<u64>,
    return_duration_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawReplay {
    frame_interval_ms: Option<u64>,
    viewport_width: Option<f64>,
}

/// Frame cadence and screen size used when driving a deck from a script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplaySettings {
    pub frame_interval: Duration,
    pub viewport: Viewport,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
            viewport: Viewport::default(),
        }
    }
}

/// Fully-resolved configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipedeckConfig {
    pub decision: DecisionTuning,
    pub feedback: FeedbackTuning,
    pub motion: MotionTuning,
    pub replay: ReplaySettings,
}

impl SwipedeckConfig {
    /// Load from [`config_path`]. Returns defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML content; `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        resolve(raw).map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })
    }
}

fn resolve(raw: RawConfig) -> Result<SwipedeckConfig, String> {
    let tuning_err = |err: TuningError| err.to_string();

    let decision = raw.decision.unwrap_or_default();
    let decision = DecisionTuning::new(
        decision
            .position_threshold_ratio
            .unwrap_or(DecisionTuning::DEFAULT_POSITION_THRESHOLD_RATIO),
        decision
            .velocity_threshold
            .unwrap_or(DecisionTuning::DEFAULT_VELOCITY_THRESHOLD),
        decision
            .min_intent_velocity
            .unwrap_or(DecisionTuning::DEFAULT_MIN_INTENT_VELOCITY),
    )
    .map_err(tuning_err)?;

    let feedback = raw.feedback.unwrap_or_default();
    let feedback = FeedbackTuning::new(
        feedback
            .max_rotation_deg
            .unwrap_or(FeedbackTuning::DEFAULT_MAX_ROTATION_DEG),
        feedback
            .label_fade_start
            .unwrap_or(FeedbackTuning::DEFAULT_LABEL_FADE_START),
    )
    .map_err(tuning_err)?;

    let motion = raw.motion.unwrap_or_default();
    let motion = MotionTuning::new(
        motion
            .exit_distance_ratio
            .unwrap_or(MotionTuning::DEFAULT_EXIT_DISTANCE_RATIO),
        motion
            .exit_duration_ms
            .map_or(MotionTuning::DEFAULT_EXIT_DURATION, Duration::from_millis),
        motion
            .return_duration_ms
            .map_or(MotionTuning::DEFAULT_RETURN_DURATION, Duration::from_millis),
    )
    .map_err(tuning_err)?;

    let replay = raw.replay.unwrap_or_default();
    let frame_interval_ms = replay
        .frame_interval_ms
        .unwrap_or(DEFAULT_FRAME_INTERVAL_MS);
    if frame_interval_ms == 0 {
        return Err("replay.frame_interval_ms must be at least 1".to_string());
    }
    let viewport = Viewport::new(replay.viewport_width.unwrap_or(Viewport::REFERENCE_WIDTH))
        .map_err(|err| format!("replay.viewport_width: {err}"))?;

    Ok(SwipedeckConfig {
        decision,
        feedback,
        motion,
        replay: ReplaySettings {
            frame_interval: Duration::from_millis(frame_interval_ms),
            viewport,
        },
    })
}

/// `$SWIPEDECK_CONFIG` when set, else `~/.swipedeck/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV_VAR), dirs::home_dir())
}

fn resolve_config_path(env_value: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = env_value.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    home.map(|home| home.join(".swipedeck").join("config.toml"))
}
