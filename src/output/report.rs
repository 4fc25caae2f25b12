use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::path::Path;

use crate::config::Campaign;
use crate::leaderboard::{CampaignSummary, ScoredPost};
use crate::scoring::CampaignTargets;

/// JSON document describing a scored campaign.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub campaign: &'a str,
    pub targets: &'a CampaignTargets,
    pub summary: &'a CampaignSummary,
    pub posts: Vec<ReportRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ReportRow<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub scored: &'a ScoredPost,
}

impl<'a> Report<'a> {
    pub fn new(
        campaign: &'a Campaign,
        summary: &'a CampaignSummary,
        posts: &'a [ScoredPost],
    ) -> Self {
        Self {
            campaign: campaign.display_name(),
            targets: &campaign.targets,
            summary,
            posts: posts
                .iter()
                .enumerate()
                .map(|(idx, scored)| ReportRow {
                    rank: idx + 1,
                    scored,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }
}

/// Save a report to a JSON file atomically
///
/// Uses atomic-write-file so a reader never sees a half-written report.
pub fn save_report(path: &Path, report: &Report) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, report).context("Failed to serialize report")?;

    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    tracing::info!(path = %path.display(), posts = report.posts.len(), "report written");
    Ok(())
}
