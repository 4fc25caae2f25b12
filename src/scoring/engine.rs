use serde::Serialize;

use super::components::Component;
use super::config::{CampaignTargets, EngagementRateBasis};
use super::grade::Grade;
use super::metrics::PostMetrics;
use super::weights::Platform;

pub const MAX_BASE_SCORE: f64 = 100.0;
pub const MAX_TOTAL_SCORE: f64 = 150.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScore {
    pub component: Component,
    pub actual: f64,
    pub target: Option<f64>,
    pub max_points: f64,
    pub base: f64,
    pub bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub weighted_engagement: f64,
    /// Percent, e.g. 5.93 means 5.93%
    pub engagement_rate: f64,
    pub base_score: f64,
    pub bonus_points: f64,
    pub total_score: f64,
    pub grade: Grade,
    pub status: &'static str,
    pub components: Vec<ComponentScore>,
}

impl ScoreResult {
    pub fn component(&self, component: Component) -> Option<&ComponentScore> {
        self.components.iter().find(|c| c.component == component)
    }
}

/// Unweighted interactions as a percentage of the chosen denominator.
/// Zero when the denominator is zero.
pub fn engagement_rate(metrics: &PostMetrics, basis: EngagementRateBasis) -> f64 {
    let denominator = match basis {
        EngagementRateBasis::Impressions => metrics.impressions,
        EngagementRateBasis::Reach => metrics.reach,
    };
    if denominator > 0 {
        metrics.raw_engagement() as f64 / denominator as f64 * 100.0
    } else {
        0.0
    }
}

pub fn calculate_score(
    platform: Platform,
    metrics: &PostMetrics,
    targets: &CampaignTargets,
) -> ScoreResult {
    let weighted_engagement = platform.weights().weighted(metrics);
    let engagement_rate = engagement_rate(metrics, targets.engagement_rate_basis);
    let multiplier = targets.bonus_multiplier();

    let axes = [
        (Component::Reach, metrics.reach as f64, targets.target_reach),
        (
            Component::Engagement,
            weighted_engagement,
            targets.target_engagement,
        ),
        (
            Component::EngagementRate,
            engagement_rate,
            targets.target_engagement_rate,
        ),
        (
            Component::Impressions,
            metrics.impressions as f64,
            targets.target_impressions,
        ),
    ];

    let components: Vec<ComponentScore> = axes
        .into_iter()
        .map(|(component, actual, target)| ComponentScore {
            component,
            actual,
            target,
            max_points: component.max_points(),
            base: component.base_points(actual, target),
            bonus: component.bonus_points(actual, target, multiplier),
        })
        .collect();

    let base_score = components
        .iter()
        .map(|c| c.base)
        .sum::<f64>()
        .min(MAX_BASE_SCORE);
    let bonus_points = components
        .iter()
        .map(|c| c.bonus)
        .sum::<f64>()
        .min(f64::MAX);
    let total_score = (base_score + bonus_points).min(MAX_TOTAL_SCORE);
    let grade = Grade::from_score(total_score);

    ScoreResult {
        weighted_engagement,
        engagement_rate,
        base_score,
        bonus_points,
        total_score,
        grade,
        status: grade.status(),
        components,
    }
}
