use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::metrics::PostMetrics;

/// Social platform a post was published on. Selects the weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Instagram, Platform::Tiktok];

    pub fn weights(&self) -> &'static EngagementWeights {
        match self {
            Platform::Instagram => &INSTAGRAM_WEIGHTS,
            Platform::Tiktok => &TIKTOK_WEIGHTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" | "ig" => Ok(Platform::Instagram),
            "tiktok" | "tt" => Ok(Platform::Tiktok),
            other => bail!("Unknown platform '{}': expected instagram or tiktok", other),
        }
    }
}

/// Importance of each interaction type when summing engagement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngagementWeights {
    pub like: f64,
    pub comment: f64,
    pub save: f64,
    pub share: f64,
}

pub const INSTAGRAM_WEIGHTS: EngagementWeights = EngagementWeights {
    like: 1.0,
    comment: 3.0,
    save: 5.0,
    share: 4.0,
};

// Saves carry no weight on TikTok.
pub const TIKTOK_WEIGHTS: EngagementWeights = EngagementWeights {
    like: 1.0,
    comment: 2.0,
    save: 0.0,
    share: 6.0,
};

impl EngagementWeights {
    /// Weighted sum of the interaction counters in `metrics`.
    pub fn weighted(&self, metrics: &PostMetrics) -> f64 {
        metrics.like_count as f64 * self.like
            + metrics.comment_count as f64 * self.comment
            + metrics.save_count as f64 * self.save
            + metrics.share_count as f64 * self.share
    }
}
