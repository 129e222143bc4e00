//! Mapping result and summary helpers.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceTier;
use crate::types::Assignment;

/// Result of auto-detecting a mapping for one header row.
///
/// Invariants:
/// - `mapping` is injective: no two fields share a column.
/// - `confidence` has exactly the keys of `mapping`.
/// - `mapping` keys and `unmapped_fields` partition the requested fields.
/// - `unmapped_headers` holds the non-blank headers no field claimed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResult {
    /// Field -> column index.
    pub mapping: BTreeMap<String, usize>,
    /// Field -> score that produced the mapping.
    pub confidence: BTreeMap<String, f64>,
    /// Non-blank headers left unclaimed, in column order.
    pub unmapped_headers: Vec<String>,
    /// Fields left unmapped, in request order.
    pub unmapped_fields: Vec<String>,
    /// Accepted pairs in acceptance order.
    pub assignments: Vec<Assignment>,
}

/// Summary counts for a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSummary {
    /// Fields requested.
    pub total_fields: usize,
    /// Fields mapped.
    pub mapped: usize,
    /// Fields left unmapped.
    pub unmapped_fields: usize,
    /// Non-blank headers left unclaimed.
    pub unmapped_headers: usize,
}

impl MappingResult {
    /// Column mapped to `field`.
    pub fn column_for(&self, field: &str) -> Option<usize> {
        self.mapping.get(field).copied()
    }

    /// Field mapped to column `index`.
    pub fn field_for_column(&self, index: usize) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.column_index == index)
            .map(|a| a.field.as_str())
    }

    /// Check if a column is already claimed.
    pub fn is_column_used(&self, index: usize) -> bool {
        self.mapping.values().any(|&column| column == index)
    }

    /// Column indices claimed by the mapping.
    pub fn used_columns(&self) -> Vec<usize> {
        let mut used: Vec<usize> = self.mapping.values().copied().collect();
        used.sort_unstable();
        used
    }

    /// Confidence tier of a mapped field.
    pub fn tier_for(&self, field: &str) -> Option<ConfidenceTier> {
        self.confidence
            .get(field)
            .map(|&score| ConfidenceTier::from_score(score))
    }

    /// Returns the count of mappings at each confidence tier.
    pub fn count_by_tier(&self) -> BTreeMap<ConfidenceTier, usize> {
        let mut counts = BTreeMap::new();
        for &score in self.confidence.values() {
            *counts.entry(ConfidenceTier::from_score(score)).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the minimum confidence score among all mappings, if any.
    pub fn min_confidence(&self) -> Option<f64> {
        self.confidence
            .values()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Returns the mean confidence score among all mappings, if any.
    pub fn mean_confidence(&self) -> Option<f64> {
        if self.confidence.is_empty() {
            return None;
        }
        let sum: f64 = self.confidence.values().sum();
        Some(sum / self.confidence.len() as f64)
    }

    /// Which of `required` are not mapped, in the order given.
    ///
    /// The engine does not know which fields are mandatory; callers decide
    /// whether a gap is fatal.
    pub fn missing_fields<'a, S: AsRef<str>>(&self, required: &'a [S]) -> Vec<&'a str> {
        required
            .iter()
            .map(AsRef::as_ref)
            .filter(|field| !self.mapping.contains_key(*field))
            .collect()
    }

    /// True when every requested field is mapped.
    pub fn is_complete(&self) -> bool {
        self.unmapped_fields.is_empty()
    }

    /// Get summary counts.
    pub fn summary(&self) -> MappingSummary {
        MappingSummary {
            total_fields: self.mapping.len() + self.unmapped_fields.len(),
            mapped: self.mapping.len(),
            unmapped_fields: self.unmapped_fields.len(),
            unmapped_headers: self.unmapped_headers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MatchTier;

    fn assignment(field: &str, column_index: usize, score: f64) -> Assignment {
        Assignment {
            field: field.to_string(),
            column_index,
            header: format!("col{column_index}"),
            score,
            tier: MatchTier::Exact,
            matched_alias: None,
        }
    }

    fn sample() -> MappingResult {
        let assignments = vec![
            assignment("studentName", 1, 1.0),
            assignment("class", 3, 0.75),
            assignment("section", 0, 0.5),
        ];
        MappingResult {
            mapping: assignments
                .iter()
                .map(|a| (a.field.clone(), a.column_index))
                .collect(),
            confidence: assignments
                .iter()
                .map(|a| (a.field.clone(), a.score))
                .collect(),
            unmapped_headers: vec!["Bus Route".to_string()],
            unmapped_fields: vec!["dateOfBirth".to_string()],
            assignments,
        }
    }

    #[test]
    fn lookups() {
        let result = sample();
        assert_eq!(result.column_for("class"), Some(3));
        assert_eq!(result.column_for("dateOfBirth"), None);
        assert_eq!(result.field_for_column(1), Some("studentName"));
        assert_eq!(result.field_for_column(2), None);
        assert!(result.is_column_used(0));
        assert!(!result.is_column_used(2));
        assert_eq!(result.used_columns(), vec![0, 1, 3]);
    }

    #[test]
    fn tiers_and_stats() {
        let result = sample();
        assert_eq!(result.tier_for("class"), Some(ConfidenceTier::Good));
        let counts = result.count_by_tier();
        assert_eq!(counts.get(&ConfidenceTier::Excellent), Some(&1));
        assert_eq!(counts.get(&ConfidenceTier::Good), Some(&1));
        assert_eq!(counts.get(&ConfidenceTier::Fair), Some(&1));
        assert_eq!(result.min_confidence(), Some(0.5));
        assert_eq!(result.mean_confidence(), Some(0.75));
    }

    #[test]
    fn missing_and_summary() {
        let result = sample();
        let required = ["studentName", "dateOfBirth", "admissionNumber"];
        assert_eq!(
            result.missing_fields(&required),
            vec!["dateOfBirth", "admissionNumber"]
        );
        assert!(!result.is_complete());
        assert_eq!(
            result.summary(),
            MappingSummary {
                total_fields: 4,
                mapped: 3,
                unmapped_fields: 1,
                unmapped_headers: 1,
            }
        );
    }

    #[test]
    fn empty_result() {
        let result = MappingResult::default();
        assert_eq!(result.min_confidence(), None);
        assert_eq!(result.mean_confidence(), None);
        assert!(result.is_complete());
        assert!(result.count_by_tier().is_empty());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("unmappedHeaders").is_some());
        assert!(json.get("unmappedFields").is_some());
        assert_eq!(json["mapping"]["class"], 3);
        assert_eq!(json["assignments"][0]["columnIndex"], 1);
    }
}
