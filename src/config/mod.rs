mod init;
mod schema;

pub use init::{template_campaign, write_template};
pub use schema::{Campaign, Post};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/campaign-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("campaign-score"))
}

/// Get the default campaign file path (~/.config/campaign-score/campaign.yaml)
pub fn get_campaign_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("campaign.yaml"))
}

/// Load a campaign from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to the campaign file. If None, uses the default
///   path (~/.config/campaign-score/campaign.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The campaign file does not exist
/// - The campaign file cannot be read
/// - The YAML cannot be parsed
pub fn load_campaign(path: Option<PathBuf>) -> Result<Campaign> {
    let campaign_path = match path {
        Some(p) => p,
        None => get_campaign_path()?,
    };

    if !campaign_path.exists() {
        anyhow::bail!(
            "Campaign file not found at {}. Run `campaign-score init` to create one",
            campaign_path.display()
        );
    }

    tracing::debug!(path = %campaign_path.display(), "loading campaign file");

    let content = fs::read_to_string(&campaign_path).with_context(|| {
        format!(
            "Failed to read campaign file at {}",
            campaign_path.display()
        )
    })?;

    let campaign: Campaign = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse campaign: invalid YAML in {}",
            campaign_path.display()
        )
    })?;

    tracing::debug!(
        posts = campaign.posts.len(),
        name = campaign.display_name(),
        "campaign loaded"
    );

    Ok(campaign)
}
