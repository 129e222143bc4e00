//! Value types returned by the matcher.

use serde::{Deserialize, Serialize};

use crate::confidence::{ConfidenceLabel, confidence_label};
use crate::score::MatchTier;

/// Outcome of matching one header against a list of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    /// Winning field, or `None` when nothing reached the acceptance threshold.
    pub field: Option<String>,
    /// Best score observed, reported even when `field` is `None`.
    pub score: f64,
}

impl BestMatch {
    /// True when a field was accepted.
    pub fn is_match(&self) -> bool {
        self.field.is_some()
    }
}

/// A header offered for manual mapping of an unmapped field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSuggestion {
    /// Column index in the header row.
    pub index: usize,
    /// Header text as supplied.
    pub header: String,
    /// Similarity score (always above the advisory threshold).
    pub score: f64,
}

impl ColumnSuggestion {
    /// Confidence label for this suggestion.
    pub fn confidence(&self) -> ConfidenceLabel {
        confidence_label(self.score)
    }
}

/// One accepted field-to-column pair and why it was accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Canonical field.
    pub field: String,
    /// Column index in the header row.
    pub column_index: usize,
    /// Header text as supplied.
    pub header: String,
    /// Score that won the assignment.
    pub score: f64,
    /// Tier of the winning comparison.
    pub tier: MatchTier,
    /// Alias that produced the score, or `None` for the field name itself.
    pub matched_alias: Option<String>,
}

impl Assignment {
    /// One-line explanation, e.g.
    /// `phone <- [3] 'Tel': exact match on alias 'tel' (1.000)`.
    pub fn explain(&self) -> String {
        let source = match &self.matched_alias {
            Some(alias) => format!("alias '{alias}'"),
            None => "field name".to_string(),
        };
        format!(
            "{} <- [{}] '{}': {} match on {source} ({:.3})",
            self.field, self.column_index, self.header, self.tier, self.score
        )
    }

    /// Confidence label for this assignment.
    pub fn confidence(&self) -> ConfidenceLabel {
        confidence_label(self.score)
    }
}
