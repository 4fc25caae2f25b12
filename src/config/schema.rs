use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{CampaignTargets, Platform, PostMetrics};

/// A campaign file: the targets every post is measured against, plus the
/// latest metrics snapshot of each submitted post.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Campaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub targets: CampaignTargets,

    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Campaign {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed campaign)")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Post {
    pub id: String,

    /// Handle of the influencer who submitted the post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influencer: Option<String>,

    pub platform: Platform,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub metrics: PostMetrics,
}

impl Post {
    pub fn influencer_or_unknown(&self) -> &str {
        self.influencer.as_deref().unwrap_or("-")
    }
}
