//! Persistent record of which jobs a worker liked or passed on.
//!
//! Deck callbacks never block on I/O: [`ChannelHandler`] forwards each
//! resolution over an unbounded channel and [`run_writer`] folds them into
//! the ledger on its own task.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use swipedeck_engine::SwipeHandler;
use swipedeck_types::{Card, JobCard};

/// Liked and disliked job ids. Adding an id is idempotent.
///
/// The two sets are independent: liking a job that was previously passed on
/// leaves the earlier dislike in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeLedger {
    #[serde(default)]
    pub likes: BTreeSet<String>,
    #[serde(default)]
    pub dislikes: BTreeSet<String>,
}

impl SwipeLedger {
    /// Returns `true` when the id was not already liked.
    pub fn like(&mut self, id: impl Into<String>) -> bool {
        self.likes.insert(id.into())
    }

    /// Returns `true` when the id was not already disliked.
    pub fn dislike(&mut self, id: impl Into<String>) -> bool {
        self.dislikes.insert(id.into())
    }

    pub fn apply(&mut self, record: SwipeRecord) -> bool {
        match record {
            SwipeRecord::Like(id) => self.like(id),
            SwipeRecord::Dislike(id) => self.dislike(id),
        }
    }

    /// Load a ledger file. A missing file yields an empty ledger.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read ledger {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse ledger {}", path.display()))
    }

    /// Write the ledger through a temp file in the same directory, then rename
    /// it over `path`.
    pub fn save_atomic(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("failed to create temp file in {}", parent.display()))?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)
            .with_context(|| format!("failed to replace ledger {}", path.display()))?;
        Ok(())
    }
}

/// One resolved card, as sent from the deck to the ledger task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeRecord {
    Like(String),
    Dislike(String),
}

/// Fold records into `ledger` until every sender is dropped, then persist the
/// result to `path` if one was given.
pub async fn run_writer(
    mut rx: UnboundedReceiver<SwipeRecord>,
    mut ledger: SwipeLedger,
    path: Option<PathBuf>,
) -> Result<SwipeLedger> {
    while let Some(record) = rx.recv().await {
        tracing::debug!(?record, "ledger record");
        if !ledger.apply(record) {
            tracing::trace!("ledger entry already present");
        }
    }

    if let Some(path) = path {
        let snapshot = ledger.clone();
        tokio::task::spawn_blocking(move || snapshot.save_atomic(&path))
            .await
            .context("ledger writer task panicked")??;
    }
    Ok(ledger)
}

/// Deck callback that hands resolutions to the ledger task.
#[derive(Debug, Clone)]
pub struct ChannelHandler {
    tx: UnboundedSender<SwipeRecord>,
}

impl ChannelHandler {
    pub fn new(tx: UnboundedSender<SwipeRecord>) -> Self {
        Self { tx }
    }

    fn send(&self, record: SwipeRecord) {
        if let Err(err) = self.tx.send(record) {
            tracing::warn!(record = ?err.0, "ledger task is gone; dropping record");
        }
    }
}

impl SwipeHandler<JobCard> for ChannelHandler {
    fn on_accept(&mut self, card: &JobCard) {
        self.send(SwipeRecord::Like(card.card_id().to_owned()));
    }

    fn on_reject(&mut self, card: &JobCard) {
        self.send(SwipeRecord::Dislike(card.card_id().to_owned()));
    }
}
