use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use super::schema::{Campaign, Post};
use crate::scoring::{CampaignTargets, EngagementRateBasis, Platform, PostMetrics};

/// Starter campaign with dashboard-default targets and one post per platform.
pub fn template_campaign() -> Campaign {
    Campaign {
        name: Some("New Campaign".to_string()),
        targets: CampaignTargets {
            target_reach: Some(100_000.0),
            target_engagement: Some(5_000.0),
            target_engagement_rate: Some(5.0),
            target_impressions: Some(150_000.0),
            bonus_multiplier: Some(1.5),
            engagement_rate_basis: EngagementRateBasis::Impressions,
        },
        posts: vec![
            Post {
                id: "ig-001".to_string(),
                influencer: Some("@instagram_creator".to_string()),
                platform: Platform::Instagram,
                posted_at: Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).single(),
                metrics: PostMetrics {
                    like_count: 8000,
                    comment_count: 300,
                    save_count: 400,
                    share_count: 200,
                    reach: 150_000,
                    impressions: 200_000,
                },
            },
            Post {
                id: "tt-001".to_string(),
                influencer: Some("@tiktok_creator".to_string()),
                platform: Platform::Tiktok,
                posted_at: Utc.with_ymd_and_hms(2026, 6, 2, 18, 30, 0).single(),
                metrics: PostMetrics {
                    like_count: 5000,
                    comment_count: 200,
                    save_count: 0,
                    share_count: 150,
                    reach: 60_000,
                    impressions: 90_000,
                },
            },
        ],
    }
}

/// Write the template campaign to `path`.
///
/// Refuses to replace an existing file unless `force` is set. Creates parent
/// directories as needed and returns the path written.
pub fn write_template(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        anyhow::bail!(
            "Campaign file already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    let yaml = serde_saphyr::to_string(&template_campaign())
        .map_err(|e| anyhow::anyhow!("Failed to serialize campaign template: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    fs::write(path, &yaml)
        .with_context(|| format!("Failed to write campaign to {}", path.display()))?;

    tracing::info!(path = %path.display(), "campaign template written");
    Ok(path.to_path_buf())
}
