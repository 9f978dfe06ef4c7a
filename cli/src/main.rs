//! Swipedeck CLI - replays scripted swipe sessions against a job deck.
//!
//! # Architecture
//!
//! ```text
//! main() -> replay() -> SwipeDeck<JobCard, ChannelHandler> --mpsc--> ledger task
//!                             ^                                          |
//!                             |                                          v
//!                        Replayer (frames)                     swipes.json (atomic)
//! ```
//!
//! The deck runs on the caller's task and never awaits its callbacks; every
//! accept/reject is forwarded to the ledger task, which persists the merged
//! ledger once the deck is dropped.

mod jobs;
mod ledger;
mod replay;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use swipedeck_config::SwipedeckConfig;
use swipedeck_engine::{CardStack, DeckTuning, SwipeDeck};
use swipedeck_types::Viewport;

use crate::ledger::{ChannelHandler, SwipeLedger};
use crate::replay::{Pacing, Replayer, Script};

#[derive(Debug, Parser)]
#[command(name = "swipedeck")]
#[command(about = "Drive a swipeable job card deck from scripted input")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay a gesture script against a list of jobs
    Replay(ReplayArgs),
}

#[derive(Debug, Args)]
struct ReplayArgs {
    /// JSON array of job postings
    jobs: PathBuf,
    /// TOML script of `[[step]]` actions
    script: PathBuf,
    /// Ledger file to merge likes and dislikes into
    #[arg(long)]
    ledger: Option<PathBuf>,
    /// Viewport width, overriding `[replay] viewport_width`
    #[arg(long)]
    width: Option<f64>,
    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pace frames in wall-clock time
    #[arg(long)]
    realtime: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay(args) => {
            let summary = replay(args).await?;
            println!("{summary}");
        }
    }

    Ok(())
}

async fn replay(args: ReplayArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => SwipedeckConfig::load_from(path)?,
        None => SwipedeckConfig::load()?,
    };
    let viewport = match args.width {
        Some(width) => Viewport::new(width).context("invalid --width")?,
        None => config.replay.viewport,
    };

    let jobs = jobs::load_jobs(&args.jobs)?;
    let script = Script::load(&args.script)?;
    let existing = match &args.ledger {
        Some(path) => SwipeLedger::load(path)?,
        None => SwipeLedger::default(),
    };

    let tuning = DeckTuning {
        decision: config.decision,
        feedback: config.feedback,
        motion: config.motion,
    };
    let stack = CardStack::from_active_jobs(jobs);
    let (tx, rx) = mpsc::unbounded_channel();
    let mut deck = SwipeDeck::new(stack, viewport, tuning, ChannelHandler::new(tx))?;
    // Spawned after the deck is built: a rejected setup leaves the ledger file alone.
    let writer = tokio::spawn(ledger::run_writer(rx, existing, args.ledger.clone()));

    let pacing = if args.realtime {
        Pacing::Realtime
    } else {
        Pacing::Simulated
    };
    tracing::info!(
        cards = deck.stack().len(),
        steps = script.steps.len(),
        width = viewport.width(),
        ?pacing,
        "starting replay"
    );
    let report = Replayer::new(&mut deck, config.replay.frame_interval, pacing)
        .run(&script)
        .await;

    // Dropping the deck closes the channel so the writer can finish.
    drop(deck);
    let ledger = writer.await.context("ledger task panicked")??;

    Ok(format!(
        "{report}\nledger:    {} likes, {} dislikes",
        ledger.likes.len(),
        ledger.dislikes.len()
    ))
}
