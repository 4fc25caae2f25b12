use serde::{Deserialize, Serialize};

/// Snapshot of a post's counters as last reported by the platform.
///
/// Missing counters deserialize as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PostMetrics {
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub save_count: u64,
    #[serde(default)]
    pub share_count: u64,
    #[serde(default)]
    pub reach: u64,
    #[serde(default)]
    pub impressions: u64,
}

impl PostMetrics {
    /// Plain sum of interactions, every type counted once.
    pub fn raw_engagement(&self) -> u64 {
        self.like_count
            .saturating_add(self.comment_count)
            .saturating_add(self.save_count)
            .saturating_add(self.share_count)
    }

    /// Add another snapshot's counters to this one (campaign totals).
    pub fn accumulate(&mut self, other: &PostMetrics) {
        self.like_count = self.like_count.saturating_add(other.like_count);
        self.comment_count = self.comment_count.saturating_add(other.comment_count);
        self.save_count = self.save_count.saturating_add(other.save_count);
        self.share_count = self.share_count.saturating_add(other.share_count);
        self.reach = self.reach.saturating_add(other.reach);
        self.impressions = self.impressions.saturating_add(other.impressions);
    }
}
