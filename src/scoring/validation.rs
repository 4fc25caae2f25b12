use std::collections::HashSet;

use super::config::CampaignTargets;
use crate::config::Campaign;

/// Validate campaign targets before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_targets(targets: &CampaignTargets) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    check_targets(targets, "targets", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a whole campaign file: targets plus post identities.
pub fn validate_campaign(campaign: &Campaign) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    check_targets(&campaign.targets, "targets", &mut errors);

    let mut seen_ids = HashSet::new();
    for (i, post) in campaign.posts.iter().enumerate() {
        if post.id.trim().is_empty() {
            errors.push(format!("posts[{}].id: must not be empty", i));
        } else if !seen_ids.insert(post.id.as_str()) {
            errors.push(format!("posts[{}].id: duplicate id '{}'", i, post.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_targets(targets: &CampaignTargets, prefix: &str, errors: &mut Vec<String>) {
    let fields = [
        ("target_reach", targets.target_reach),
        ("target_engagement", targets.target_engagement),
        ("target_engagement_rate", targets.target_engagement_rate),
        ("target_impressions", targets.target_impressions),
        ("bonus_multiplier", targets.bonus_multiplier),
    ];

    for (name, value) in fields {
        if let Some(v) = value {
            if !v.is_finite() {
                errors.push(format!("{}.{}: must be a finite number", prefix, name));
            } else if v < 0.0 {
                errors.push(format!("{}.{}: must be non-negative", prefix, name));
            }
        }
    }
}
