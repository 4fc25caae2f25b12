use serde::Serialize;
use std::cmp::Ordering;

use crate::config::{Campaign, Post};
use crate::scoring::{
    calculate_score, engagement_rate, Grade, Platform, PostMetrics, ScoreResult,
};

/// A post together with its score against the campaign targets.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPost {
    pub post: Post,
    pub result: ScoreResult,
}

/// Restricts which posts make it onto the leaderboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaderboardFilter {
    pub platform: Option<Platform>,
    /// Keep posts graded at least this well
    pub min_grade: Option<Grade>,
}

impl LeaderboardFilter {
    pub fn matches(&self, scored: &ScoredPost) -> bool {
        if let Some(platform) = self.platform {
            if scored.post.platform != platform {
                return false;
            }
        }
        if let Some(min_grade) = self.min_grade {
            if scored.result.grade < min_grade {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeCount {
    pub grade: Grade,
    pub count: usize,
}

/// Aggregates shown above the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignSummary {
    pub posts: usize,
    pub average_total_score: f64,
    pub best_post: Option<String>,
    /// Every grade, best first, including those with no posts
    pub grade_distribution: Vec<GradeCount>,
    pub total_reach: u64,
    pub total_impressions: u64,
    pub total_weighted_engagement: f64,
    /// Rate over the summed counters, on the campaign's rate basis
    pub engagement_rate: f64,
}

/// Score every post in the campaign against its targets.
pub fn score_campaign(campaign: &Campaign) -> Vec<ScoredPost> {
    campaign
        .posts
        .iter()
        .map(|post| {
            let result = calculate_score(post.platform, &post.metrics, &campaign.targets);
            tracing::debug!(
                post = %post.id,
                platform = %post.platform,
                total = result.total_score,
                grade = %result.grade,
                "scored post"
            );
            ScoredPost {
                post: post.clone(),
                result,
            }
        })
        .collect()
}

/// Sort best first.
///
/// Order: total score descending, then weighted engagement descending, then
/// earlier posts first (posts without a timestamp last), then by id.
pub fn rank(posts: &mut [ScoredPost]) {
    posts.sort_by(compare_scored);
}

fn compare_scored(a: &ScoredPost, b: &ScoredPost) -> Ordering {
    b.result
        .total_score
        .partial_cmp(&a.result.total_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.result
                .weighted_engagement
                .partial_cmp(&a.result.weighted_engagement)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| match (a.post.posted_at, b.post.posted_at) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.post.id.cmp(&b.post.id))
}

/// Score, filter and rank a campaign's posts.
pub fn leaderboard(campaign: &Campaign, filter: &LeaderboardFilter) -> Vec<ScoredPost> {
    let scored = score_campaign(campaign);
    let total = scored.len();

    let mut kept: Vec<ScoredPost> = scored.into_iter().filter(|s| filter.matches(s)).collect();
    if kept.len() != total {
        tracing::debug!(kept = kept.len(), total, "filtered leaderboard");
    }

    rank(&mut kept);
    kept
}

pub fn summarize(campaign: &Campaign, posts: &[ScoredPost]) -> CampaignSummary {
    let mut totals = PostMetrics::default();
    for scored in posts {
        totals.accumulate(&scored.post.metrics);
    }

    let average_total_score = if posts.is_empty() {
        0.0
    } else {
        posts.iter().map(|s| s.result.total_score).sum::<f64>() / posts.len() as f64
    };

    let best_post = posts
        .iter()
        .min_by(|a, b| compare_scored(a, b))
        .map(|s| s.post.id.clone());

    let grade_distribution = Grade::ALL
        .iter()
        .map(|grade| GradeCount {
            grade: *grade,
            count: posts.iter().filter(|s| s.result.grade == *grade).count(),
        })
        .collect();

    CampaignSummary {
        posts: posts.len(),
        average_total_score,
        best_post,
        grade_distribution,
        total_reach: totals.reach,
        total_impressions: totals.impressions,
        total_weighted_engagement: posts.iter().map(|s| s.result.weighted_engagement).sum(),
        engagement_rate: engagement_rate(&totals, campaign.targets.engagement_rate_basis),
    }
}
