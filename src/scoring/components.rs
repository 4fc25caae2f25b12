use serde::Serialize;
use std::fmt;

use super::config::usable_target;

/// One of the four target-comparison axes of the base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Reach,
    Engagement,
    EngagementRate,
    Impressions,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Reach,
        Component::Engagement,
        Component::EngagementRate,
        Component::Impressions,
    ];

    /// Cap on this component's base score. The four caps sum to 100.
    pub fn max_points(&self) -> f64 {
        match self {
            Component::Reach => 25.0,
            Component::Engagement => 25.0,
            Component::EngagementRate => 30.0,
            Component::Impressions => 20.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Component::Reach => "Reach",
            Component::Engagement => "Engagement",
            Component::EngagementRate => "Engagement Rate",
            Component::Impressions => "Impressions",
        }
    }

    /// Base points for `actual` against `target`, capped at `max_points()`.
    /// Zero when the target is unusable.
    pub fn base_points(&self, actual: f64, target: Option<f64>) -> f64 {
        let max = self.max_points();
        match usable_target(target) {
            Some(target) => (actual / target * max).min(max).max(0.0),
            None => 0.0,
        }
    }

    /// Bonus points for the part of `actual` above `target`.
    /// Zero at or below target, and when the target is unusable.
    /// Saturates at `f64::MAX` so a tiny target never yields infinity.
    pub fn bonus_points(&self, actual: f64, target: Option<f64>, multiplier: f64) -> f64 {
        match usable_target(target) {
            Some(target) if actual > target => {
                let bonus = (actual - target) / target * self.max_points() * multiplier.max(0.0);
                bonus.min(f64::MAX)
            }
            _ => 0.0,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_sum_to_hundred() {
        let total: f64 = Component::ALL.iter().map(|c| c.max_points()).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_base_points_proportional() {
        // Half the target earns half the points
        assert_eq!(Component::Reach.base_points(50_000.0, Some(100_000.0)), 12.5);
        assert_eq!(Component::EngagementRate.base_points(2.5, Some(5.0)), 15.0);
    }

    #[test]
    fn test_base_points_capped() {
        assert_eq!(Component::Reach.base_points(150_000.0, Some(100_000.0)), 25.0);
        assert_eq!(Component::Impressions.base_points(1e12, Some(1.0)), 20.0);
    }

    #[test]
    fn test_base_points_zero_target() {
        for component in Component::ALL {
            assert_eq!(component.base_points(1000.0, None), 0.0);
            assert_eq!(component.base_points(1000.0, Some(0.0)), 0.0);
            assert_eq!(component.base_points(0.0, Some(0.0)), 0.0);
        }
    }

    #[test]
    fn test_bonus_only_above_target() {
        let c = Component::Engagement;
        assert_eq!(c.bonus_points(4000.0, Some(5000.0), 1.5), 0.0);
        assert_eq!(c.bonus_points(5000.0, Some(5000.0), 1.5), 0.0);
        // (6000 - 5000) / 5000 * 25 * 1.5
        assert!((c.bonus_points(6000.0, Some(5000.0), 1.5) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_zero_target() {
        for component in Component::ALL {
            assert_eq!(component.bonus_points(1000.0, None, 1.5), 0.0);
            assert_eq!(component.bonus_points(1000.0, Some(0.0), 1.5), 0.0);
        }
    }

    #[test]
    fn test_bonus_negative_multiplier_is_zero() {
        assert_eq!(Component::Reach.bonus_points(200.0, Some(100.0), -1.0), 0.0);
    }

    #[test]
    fn test_bonus_saturates_for_tiny_target() {
        let bonus = Component::Reach.bonus_points(1e10, Some(1e-300), 1.5);
        assert!(bonus.is_finite());
        assert_eq!(bonus, f64::MAX);
    }
}
