//! Job listing input for replays.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use swipedeck_types::JobCard;

/// Read a JSON array of job records. Inactive listings are kept here; the
/// deck filters them when it is built.
pub fn load_jobs(path: &Path) -> Result<Vec<JobCard>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read jobs from {}", path.display()))?;
    let jobs: Vec<JobCard> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse jobs in {}", path.display()))?;
    tracing::debug!(count = jobs.len(), path = %path.display(), "loaded jobs");
    Ok(jobs)
}
