use serde::{Deserialize, Serialize};

/// Bonus multiplier applied when a campaign does not set one.
pub const DEFAULT_BONUS_MULTIPLIER: f64 = 1.5;

/// Denominator used for engagement rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementRateBasis {
    /// Interactions per impression (dashboard default).
    #[default]
    Impressions,
    /// Interactions per unique account reached.
    Reach,
}

/// Per-campaign targets the posts are scored against.
///
/// Every target is optional. A target that is unset, zero, negative or not a
/// finite number takes its component out of both the base score and the
/// bonus.
///
/// Example YAML:
/// ```yaml
/// targets:
///   target_reach: 100000
///   target_engagement: 5000
///   target_engagement_rate: 5.0
///   target_impressions: 150000
///   bonus_multiplier: 1.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CampaignTargets {
    /// Unique accounts reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reach: Option<f64>,

    /// Weighted engagement (platform weights applied)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_engagement: Option<f64>,

    /// Engagement rate in percent, e.g. 5.0 for 5%
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_engagement_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_impressions: Option<f64>,

    /// Scales every bonus component (default: 1.5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_multiplier: Option<f64>,

    #[serde(default)]
    pub engagement_rate_basis: EngagementRateBasis,
}

impl CampaignTargets {
    /// Effective bonus multiplier. Never negative, so bonuses never subtract.
    pub fn bonus_multiplier(&self) -> f64 {
        // f64::max drops NaN in favour of the other operand
        self.bonus_multiplier
            .unwrap_or(DEFAULT_BONUS_MULTIPLIER)
            .max(0.0)
    }
}

/// A target that can actually be divided by.
pub(crate) fn usable_target(target: Option<f64>) -> Option<f64> {
    target.filter(|t| t.is_finite() && *t > 0.0)
}
