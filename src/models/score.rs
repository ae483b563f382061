use serde::{Deserialize, Serialize};

/// Discrete health-status classification derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl StatusTier {
    /// Bucket a 0-100 score into a tier. Cutoffs are exact: 90 is already
    /// Excellent, 89.999... is Good, and so on down.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            StatusTier::Excellent
        } else if score >= 75.0 {
            StatusTier::Good
        } else if score >= 60.0 {
            StatusTier::Fair
        } else if score >= 40.0 {
            StatusTier::Poor
        } else {
            StatusTier::Critical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusTier::Excellent => "excellent",
            StatusTier::Good => "good",
            StatusTier::Fair => "fair",
            StatusTier::Poor => "poor",
            StatusTier::Critical => "critical",
        }
    }
}

/// A derived health score. Never persisted independently of its source
/// snapshot; recompute on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub value: f64,
    pub tier: StatusTier,
}

impl HealthScore {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            tier: StatusTier::from_score(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_buckets_at_exact_cutoffs() {
        assert_eq!(StatusTier::from_score(100.0), StatusTier::Excellent);
        assert_eq!(StatusTier::from_score(90.0), StatusTier::Excellent);
        assert_eq!(StatusTier::from_score(89.9), StatusTier::Good);
        assert_eq!(StatusTier::from_score(75.0), StatusTier::Good);
        assert_eq!(StatusTier::from_score(74.9), StatusTier::Fair);
        assert_eq!(StatusTier::from_score(60.0), StatusTier::Fair);
        assert_eq!(StatusTier::from_score(59.9), StatusTier::Poor);
        assert_eq!(StatusTier::from_score(40.0), StatusTier::Poor);
        assert_eq!(StatusTier::from_score(39.9), StatusTier::Critical);
        assert_eq!(StatusTier::from_score(0.0), StatusTier::Critical);
    }

    #[test]
    fn neutral_default_is_fair() {
        assert_eq!(HealthScore::new(50.0).tier, StatusTier::Fair);
    }
}
