//! Confidence labels for mapping scores.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of [`ConfidenceTier::Excellent`].
pub const EXCELLENT_MIN: f64 = 0.9;
/// Lower bound (inclusive) of [`ConfidenceTier::Good`].
pub const GOOD_MIN: f64 = 0.7;
/// Lower bound (inclusive) of [`ConfidenceTier::Fair`].
pub const FAIR_MIN: f64 = 0.5;

/// Confidence buckets for a match score.
///
/// Ordered from weakest to strongest so tiers can be compared directly:
/// - `Excellent`: exact or alias match, safe to accept as-is
/// - `Good`: strong partial match
/// - `Fair`: accepted, but worth a glance
/// - `Low`: below the acceptance threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// Below 0.5.
    Low,
    /// 0.5 up to 0.7.
    Fair,
    /// 0.7 up to 0.9.
    Good,
    /// 0.9 and above.
    Excellent,
}

impl ConfidenceTier {
    /// Bucket a score. NaN is `Low`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_MIN {
            Self::Excellent
        } else if score >= GOOD_MIN {
            Self::Good
        } else if score >= FAIR_MIN {
            Self::Fair
        } else {
            Self::Low
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Low => "Low",
        }
    }

    /// Returns a human-readable description of the tier.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "exact or alias match - safe to accept",
            Self::Good => "strong partial match - likely correct",
            Self::Fair => "weak match - should review",
            Self::Low => "not confident - map manually",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label and tier for a score, as rendered by the import UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfidenceLabel {
    pub label: &'static str,
    pub tier: ConfidenceTier,
}

/// Classify a score: >=0.9 Excellent, >=0.7 Good, >=0.5 Fair, else Low.
pub fn confidence_label(score: f64) -> ConfidenceLabel {
    let tier = ConfidenceTier::from_score(score);
    ConfidenceLabel {
        label: tier.label(),
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(confidence_label(0.95).label, "Excellent");
        assert_eq!(confidence_label(0.75).label, "Good");
        assert_eq!(confidence_label(0.55).label, "Fair");
        assert_eq!(confidence_label(0.3).label, "Low");
    }

    #[test]
    fn test_lower_bounds_inclusive() {
        assert_eq!(ConfidenceTier::from_score(0.9), ConfidenceTier::Excellent);
        assert_eq!(ConfidenceTier::from_score(0.7), ConfidenceTier::Good);
        assert_eq!(ConfidenceTier::from_score(0.5), ConfidenceTier::Fair);
        assert_eq!(ConfidenceTier::from_score(0.4999), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(1.0), ConfidenceTier::Excellent);
    }

    #[test]
    fn test_nan_is_low() {
        assert_eq!(ConfidenceTier::from_score(f64::NAN), ConfidenceTier::Low);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(ConfidenceTier::Excellent > ConfidenceTier::Good);
        assert!(ConfidenceTier::Good > ConfidenceTier::Fair);
        assert!(ConfidenceTier::Fair > ConfidenceTier::Low);
    }

    #[test]
    fn test_label_matches_tier() {
        let label = confidence_label(0.72);
        assert_eq!(label.tier, ConfidenceTier::Good);
        assert_eq!(label.label, label.tier.label());
        assert_eq!(label.tier.to_string(), "Good");
    }
}
