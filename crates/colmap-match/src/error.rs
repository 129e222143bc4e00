//! Error types for matcher configuration.

use thiserror::Error;

/// Errors from loading or validating a [`crate::MatchConfig`].
///
/// Matching itself never fails; only configuration can be rejected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A threshold lies outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    /// Acceptance threshold of zero would accept pairs with nothing in common.
    #[error("acceptance_threshold must be above 0")]
    ZeroAcceptance,

    /// Advisory threshold is stricter than the acceptance threshold.
    #[error("advisory threshold {advisory} is above acceptance threshold {acceptance}")]
    AdvisoryAboveAcceptance { advisory: f64, acceptance: f64 },

    /// Suggestions were disabled entirely.
    #[error("max_suggestions must be at least 1")]
    NoSuggestions,

    /// Config JSON could not be parsed.
    #[error("failed to parse match config: {0}")]
    Parse(#[from] serde_json::Error),
}
