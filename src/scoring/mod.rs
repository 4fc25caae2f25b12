pub mod components;
pub mod config;
pub mod engine;
pub mod grade;
pub mod metrics;
pub mod validation;
pub mod weights;

pub use components::Component;
pub use config::*;
pub use engine::{
    calculate_score, engagement_rate, ComponentScore, ScoreResult, MAX_BASE_SCORE,
    MAX_TOTAL_SCORE,
};
pub use grade::Grade;
pub use metrics::PostMetrics;
pub use validation::{validate_campaign, validate_targets};
pub use weights::{EngagementWeights, Platform, INSTAGRAM_WEIGHTS, TIKTOK_WEIGHTS};
