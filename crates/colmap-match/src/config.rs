//! Matcher configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default minimum score for automatic mapping.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.5;
/// Default score a header must exceed to be offered as a manual suggestion.
pub const ADVISORY_THRESHOLD: f64 = 0.2;
/// Default number of suggestions returned per field.
pub const MAX_SUGGESTIONS: usize = 3;

/// Thresholds and limits for a [`crate::ColumnMapper`].
///
/// Loadable from JSON; missing keys take their defaults:
///
/// ```json
/// { "acceptance_threshold": 0.6, "max_headers": 200 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Minimum score (inclusive) for automatic mapping.
    pub acceptance_threshold: f64,
    /// Score a header must exceed (exclusive) to be suggested.
    pub advisory_threshold: f64,
    /// Suggestions returned per field.
    pub max_suggestions: usize,
    /// Only the first `n` headers are scored; the rest stay unmapped.
    pub max_headers: Option<usize>,
    /// Only the first `n` fields are scored; the rest stay unmapped.
    pub max_fields: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: ACCEPTANCE_THRESHOLD,
            advisory_threshold: ADVISORY_THRESHOLD,
            max_suggestions: MAX_SUGGESTIONS,
            max_headers: None,
            max_fields: None,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the acceptance threshold.
    #[must_use]
    pub fn with_acceptance_threshold(mut self, threshold: f64) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    /// Set the advisory threshold.
    #[must_use]
    pub fn with_advisory_threshold(mut self, threshold: f64) -> Self {
        self.advisory_threshold = threshold;
        self
    }

    /// Set the number of suggestions per field.
    #[must_use]
    pub fn with_max_suggestions(mut self, count: usize) -> Self {
        self.max_suggestions = count;
        self
    }

    /// Cap the number of headers scored per call.
    #[must_use]
    pub fn with_max_headers(mut self, cap: Option<usize>) -> Self {
        self.max_headers = cap;
        self
    }

    /// Cap the number of fields scored per call.
    #[must_use]
    pub fn with_max_fields(mut self, cap: Option<usize>) -> Self {
        self.max_fields = cap;
        self
    }

    /// Check thresholds are in range and ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("acceptance_threshold", self.acceptance_threshold),
            ("advisory_threshold", self.advisory_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.acceptance_threshold == 0.0 {
            return Err(ConfigError::ZeroAcceptance);
        }
        if self.advisory_threshold > self.acceptance_threshold {
            return Err(ConfigError::AdvisoryAboveAcceptance {
                advisory: self.advisory_threshold,
                acceptance: self.acceptance_threshold,
            });
        }
        if self.max_suggestions == 0 {
            return Err(ConfigError::NoSuggestions);
        }
        Ok(())
    }

    pub(crate) fn header_limit(&self, available: usize) -> usize {
        self.max_headers.map_or(available, |cap| cap.min(available))
    }

    pub(crate) fn field_limit(&self, available: usize) -> usize {
        self.max_fields.map_or(available, |cap| cap.min(available))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.acceptance_threshold, 0.5);
        assert_eq!(config.advisory_threshold, 0.2);
        assert_eq!(config.max_suggestions, 3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = MatchConfig::from_json_str(r#"{ "max_headers": 50 }"#).unwrap();
        assert_eq!(config.max_headers, Some(50));
        assert_eq!(config.acceptance_threshold, ACCEPTANCE_THRESHOLD);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = MatchConfig::from_json_str(r#"{ "threshold": 0.4 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range() {
        let err = MatchConfig::default()
            .with_acceptance_threshold(1.2)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ThresholdOutOfRange { name: "acceptance_threshold", .. }
        ));

        let err = MatchConfig::default()
            .with_advisory_threshold(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOutOfRange { .. }));
    }

    #[test]
    fn rejects_zero_acceptance() {
        let err = MatchConfig::default()
            .with_acceptance_threshold(0.0)
            .with_advisory_threshold(0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroAcceptance));

        let json = r#"{ "acceptance_threshold": 0.0, "advisory_threshold": 0.0 }"#;
        let err = MatchConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroAcceptance));
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let err = MatchConfig::default()
            .with_acceptance_threshold(0.3)
            .with_advisory_threshold(0.4)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::AdvisoryAboveAcceptance { .. }));
    }

    #[test]
    fn rejects_zero_suggestions() {
        let err = MatchConfig::default()
            .with_max_suggestions(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoSuggestions));
    }

    #[test]
    fn limits_clamp_to_available() {
        let config = MatchConfig::default().with_max_headers(Some(3));
        assert_eq!(config.header_limit(10), 3);
        assert_eq!(config.header_limit(2), 2);
        assert_eq!(config.field_limit(7), 7);
    }
}
