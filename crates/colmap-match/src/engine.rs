//! Mapping engine implementation.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use colmap_aliases::AliasRegistry;
use tracing::{debug, debug_span, trace, warn};

use crate::config::MatchConfig;
use crate::normalize::normalize;
use crate::result::MappingResult;
use crate::score::{FieldProfile, FieldScore, MatchTier, ProfileHit, score_field};
use crate::types::{Assignment, BestMatch, ColumnSuggestion};

/// Engine for mapping spreadsheet headers to canonical fields.
///
/// The mapper borrows an immutable [`AliasRegistry`] and holds no other state,
/// so one registry can back any number of concurrent import sessions. Every
/// call computes a fresh result.
///
/// # Example
///
/// ```ignore
/// use colmap_aliases::{AliasRegistry, Vertical};
/// use colmap_match::ColumnMapper;
///
/// let registry = AliasRegistry::for_vertical(Vertical::Students)?;
/// let mapper = ColumnMapper::new(&registry);
/// let result = mapper.auto_detect(&["Admission No", "Student Name"], registry.field_names());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ColumnMapper<'r> {
    registry: &'r AliasRegistry,
    config: MatchConfig,
}

/// A scored `(field, column)` pair that cleared the acceptance threshold.
struct Candidate<'a> {
    field: usize,
    column: usize,
    hit: ProfileHit<'a>,
}

impl<'r> ColumnMapper<'r> {
    /// Creates a mapper with the default thresholds.
    pub fn new(registry: &'r AliasRegistry) -> Self {
        Self::with_config(registry, MatchConfig::default())
    }

    /// Creates a mapper with custom thresholds and limits.
    pub fn with_config(registry: &'r AliasRegistry, config: MatchConfig) -> Self {
        Self { registry, config }
    }

    /// The registry this mapper matches against.
    pub fn registry(&self) -> &'r AliasRegistry {
        self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score one header against one field, with an explanation.
    pub fn score(&self, header: &str, field: &str) -> FieldScore {
        score_field(self.registry, header, field)
    }

    /// Find the best field for a single header.
    ///
    /// Each field scores the best of its own name and its aliases; an alias
    /// equal to the header scores `1.0` outright. The highest-scoring field
    /// wins (earlier fields win ties) and is reported only if it reaches the
    /// acceptance threshold.
    pub fn find_best_match<S: AsRef<str>>(&self, header: &str, fields: &[S]) -> BestMatch {
        let normalized = normalize(header);
        let limit = self.config.field_limit(fields.len());

        let mut best_field: Option<&str> = None;
        let mut best_score = 0.0;
        for field in &fields[..limit] {
            let profile = FieldProfile::new(field.as_ref(), self.registry);
            let hit = profile.score(&normalized);
            if hit.score > best_score {
                best_score = hit.score;
                best_field = Some(profile.name);
            }
        }

        let field = best_field
            .filter(|_| best_score >= self.config.acceptance_threshold)
            .map(str::to_string);
        BestMatch {
            field,
            score: best_score,
        }
    }

    /// Auto-detect a one-to-one mapping from headers to fields.
    ///
    /// 1. Every `(field, column)` pair is scored in isolation; pairs below the
    ///    acceptance threshold are dropped.
    /// 2. Pairs are sorted by score, highest first. Ties keep enumeration
    ///    order: fields in the order given, then columns left to right.
    /// 3. Pairs are accepted greedily while both the field and the column are
    ///    still free.
    ///
    /// The greedy walk is deterministic and easy to explain, but it does not
    /// maximize the total score the way an optimal bipartite assignment would.
    ///
    /// Never fails: empty or hopeless inputs give an empty mapping. Cost is
    /// `O(F x H x A)` for F fields, H headers and A aliases per field; use
    /// [`MatchConfig::max_headers`] / [`MatchConfig::max_fields`] to bound it.
    pub fn auto_detect<H, F>(&self, headers: &[H], fields: &[F]) -> MappingResult
    where
        H: AsRef<str>,
        F: AsRef<str>,
    {
        let span = debug_span!("auto_detect", headers = headers.len(), fields = fields.len());
        let _guard = span.enter();

        let headers: Vec<&str> = headers.iter().map(AsRef::as_ref).collect();
        let fields = dedupe_fields(fields);
        let header_limit = self.config.header_limit(headers.len());
        let field_limit = self.config.field_limit(fields.len());
        if header_limit < headers.len() {
            warn!(
                scored = header_limit,
                skipped = headers.len() - header_limit,
                "header count exceeds limit; extra columns left unmapped"
            );
        }
        if field_limit < fields.len() {
            warn!(
                scored = field_limit,
                skipped = fields.len() - field_limit,
                "field count exceeds limit; extra fields left unmapped"
            );
        }

        let normalized: Vec<String> = headers[..header_limit]
            .iter()
            .map(|header| normalize(header))
            .collect();
        let profiles: Vec<FieldProfile<'_>> = fields[..field_limit]
            .iter()
            .map(|field| FieldProfile::new(field, self.registry))
            .collect();

        let mut candidates: Vec<Candidate<'_>> = Vec::new();
        for (field, profile) in profiles.iter().enumerate() {
            for (column, header) in normalized.iter().enumerate() {
                let hit = profile.score(header);
                if hit.tier != MatchTier::None && hit.score >= self.config.acceptance_threshold {
                    candidates.push(Candidate { field, column, hit });
                }
            }
        }

        // Stable sort keeps enumeration order for equal scores.
        candidates.sort_by(|a, b| {
            b.hit
                .score
                .partial_cmp(&a.hit.score)
                .unwrap_or(Ordering::Equal)
        });

        let mut claimed_fields = vec![false; profiles.len()];
        let mut claimed_columns = vec![false; headers.len()];
        let mut assignments = Vec::new();

        for candidate in candidates {
            let name = profiles[candidate.field].name;
            if claimed_fields[candidate.field] || claimed_columns[candidate.column] {
                trace!(
                    field = name,
                    column = candidate.column,
                    score = candidate.hit.score,
                    "pair skipped, already claimed"
                );
                continue;
            }
            claimed_fields[candidate.field] = true;
            claimed_columns[candidate.column] = true;

            let header = headers[candidate.column];
            trace!(
                field = name,
                column = candidate.column,
                header,
                score = candidate.hit.score,
                "pair accepted"
            );
            assignments.push(Assignment {
                field: name.to_string(),
                column_index: candidate.column,
                header: header.to_string(),
                score: candidate.hit.score,
                tier: candidate.hit.tier,
                matched_alias: candidate.hit.alias.map(str::to_string),
            });
        }

        let mapping: BTreeMap<String, usize> = assignments
            .iter()
            .map(|a| (a.field.clone(), a.column_index))
            .collect();
        let confidence: BTreeMap<String, f64> = assignments
            .iter()
            .map(|a| (a.field.clone(), a.score))
            .collect();

        let unmapped_headers: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(index, header)| !claimed_columns[*index] && !header.trim().is_empty())
            .map(|(_, header)| (*header).to_string())
            .collect();
        let unmapped_fields: Vec<String> = fields
            .iter()
            .filter(|field| !mapping.contains_key(**field))
            .map(|field| (*field).to_string())
            .collect();

        debug!(
            mapped = mapping.len(),
            unmapped_fields = unmapped_fields.len(),
            unmapped_headers = unmapped_headers.len(),
            "auto-detect complete"
        );

        MappingResult {
            mapping,
            confidence,
            unmapped_headers,
            unmapped_fields,
            assignments,
        }
    }

    /// Rank headers as manual-mapping suggestions for one field.
    ///
    /// Headers whose index is in `exclude` are skipped. Only headers scoring
    /// above the advisory threshold are returned, best first (ties in column
    /// order), at most [`MatchConfig::max_suggestions`] of them. Suggestions
    /// are advisory and never applied automatically.
    pub fn suggestions_for_field<H: AsRef<str>>(
        &self,
        field: &str,
        headers: &[H],
        exclude: &[usize],
    ) -> Vec<ColumnSuggestion> {
        let profile = FieldProfile::new(field, self.registry);
        let limit = self.config.header_limit(headers.len());

        let mut suggestions: Vec<ColumnSuggestion> = headers[..limit]
            .iter()
            .enumerate()
            .filter(|(index, _)| !exclude.contains(index))
            .filter_map(|(index, header)| {
                let header: &str = header.as_ref();
                let hit = profile.score(&normalize(header));
                let suggested =
                    hit.tier != MatchTier::None && hit.score > self.config.advisory_threshold;
                suggested.then(|| ColumnSuggestion {
                    index,
                    header: header.to_string(),
                    score: hit.score,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }

    /// Suggestions for every unmapped field of `result`, skipping claimed columns.
    ///
    /// Fields with no suggestion are omitted.
    pub fn suggestions_for_unmapped<H: AsRef<str>>(
        &self,
        result: &MappingResult,
        headers: &[H],
    ) -> BTreeMap<String, Vec<ColumnSuggestion>> {
        let used = result.used_columns();
        result
            .unmapped_fields
            .iter()
            .filter_map(|field| {
                let suggestions = self.suggestions_for_field(field, headers, &used);
                (!suggestions.is_empty()).then(|| (field.clone(), suggestions))
            })
            .collect()
    }
}

/// Trim field names and drop repeats, keeping the first occurrence.
///
/// Registry names are stored trimmed, so `" phone"` resolves to `phone`.
fn dedupe_fields<F: AsRef<str>>(fields: &[F]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    let mut unique = Vec::with_capacity(fields.len());
    for field in fields {
        let name: &str = field.as_ref().trim();
        if seen.insert(name) {
            unique.push(name);
        } else {
            debug!(field = name, "duplicate field ignored");
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> AliasRegistry {
        AliasRegistry::builder()
            .field("phone", ["tel", "telephone", "mobile no"])
            .field("email", ["e mail", "email id"])
            .field("parentPhone", ["phone no", "parent mobile"])
            .field("parentEmail", ["email"])
            .build()
            .unwrap()
    }

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_best_match_via_alias() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let best = mapper.find_best_match("Tel", &["email", "phone"]);
        assert_eq!(best.field.as_deref(), Some("phone"));
        approx(best.score, 1.0);
        assert!(best.is_match());
    }

    #[test]
    fn test_best_match_none_reports_score() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let best = mapper.find_best_match("Favourite colour", &["email", "phone"]);
        assert_eq!(best.field, None);
        approx(best.score, 0.0);

        // "roll" in "rollnumber" = 0.4, below acceptance
        let best = mapper.find_best_match("Roll", &["rollNumber"]);
        assert_eq!(best.field, None);
        approx(best.score, 0.4);
    }

    #[test]
    fn test_best_match_tie_prefers_first_field() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let best = mapper.find_best_match("Email", &["email", "parentEmail"]);
        assert_eq!(best.field.as_deref(), Some("email"));

        let best = mapper.find_best_match("Email", &["parentEmail", "email"]);
        assert_eq!(best.field.as_deref(), Some("parentEmail"));
    }

    #[test]
    fn test_best_match_empty_fields() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);
        let fields: [&str; 0] = [];
        assert_eq!(
            mapper.find_best_match("Tel", &fields),
            BestMatch {
                field: None,
                score: 0.0
            }
        );
    }

    #[test]
    fn test_greedy_resolves_conflict() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        // phone: [1.0, 0.625], parentPhone: [0.5, 1.0]
        let result = mapper.auto_detect(&["Mobile No", "Phone No"], &["phone", "parentPhone"]);
        assert_eq!(result.column_for("phone"), Some(0));
        assert_eq!(result.column_for("parentPhone"), Some(1));
        assert!(result.unmapped_fields.is_empty());
        assert!(result.unmapped_headers.is_empty());
    }

    #[test]
    fn test_tie_keeps_earlier_column() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let result = mapper.auto_detect(&["Tel", "Telephone"], &["phone"]);
        assert_eq!(result.column_for("phone"), Some(0));
        assert_eq!(result.unmapped_headers, vec!["Telephone"]);
    }

    #[test]
    fn test_tie_keeps_earlier_field() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let result = mapper.auto_detect(&["Email"], &["parentEmail", "email"]);
        assert_eq!(result.column_for("parentEmail"), Some(0));
        assert_eq!(result.unmapped_fields, vec!["email"]);
    }

    #[test]
    fn test_assignment_explains_itself() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let result = mapper.auto_detect(&["Name", "TEL"], &["phone"]);
        assert_eq!(result.assignments.len(), 1);
        let assignment = &result.assignments[0];
        assert_eq!(assignment.tier, MatchTier::Exact);
        assert_eq!(assignment.matched_alias.as_deref(), Some("tel"));
        assert_eq!(
            assignment.explain(),
            "phone <- [1] 'TEL': exact match on alias 'tel' (1.000)"
        );
    }

    #[test]
    fn test_blank_headers_never_listed() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let result = mapper.auto_detect(&["", "   ", "Email", "Notes"], &["email"]);
        assert_eq!(result.column_for("email"), Some(2));
        assert_eq!(result.unmapped_headers, vec!["Notes"]);
    }

    #[test]
    fn test_duplicate_fields_collapse() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let result = mapper.auto_detect(&["Email"], &["email", "email"]);
        assert_eq!(result.mapping.len(), 1);
        assert!(result.unmapped_fields.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);
        let none: [&str; 0] = [];

        let result = mapper.auto_detect(&none, &none);
        assert_eq!(result, MappingResult::default());

        let result = mapper.auto_detect(&none, &["email"]);
        assert_eq!(result.unmapped_fields, vec!["email"]);

        let result = mapper.auto_detect(&["Email"], &none);
        assert!(result.mapping.is_empty());
        assert_eq!(result.unmapped_headers, vec!["Email"]);
    }

    #[test]
    fn test_header_cap_leaves_tail_unmapped() {
        let registry = registry();
        let config = MatchConfig::default().with_max_headers(Some(1));
        let mapper = ColumnMapper::with_config(&registry, config);

        let result = mapper.auto_detect(&["Notes", "Email"], &["email"]);
        assert!(result.mapping.is_empty());
        assert_eq!(result.unmapped_headers, vec!["Notes", "Email"]);
        assert_eq!(result.unmapped_fields, vec!["email"]);
    }

    #[test]
    fn test_field_cap_leaves_tail_unmapped() {
        let registry = registry();
        let config = MatchConfig::default().with_max_fields(Some(1));
        let mapper = ColumnMapper::with_config(&registry, config);

        let result = mapper.auto_detect(&["Email", "Tel"], &["email", "phone"]);
        assert_eq!(result.column_for("email"), Some(0));
        assert_eq!(result.unmapped_fields, vec!["phone"]);
        assert_eq!(result.unmapped_headers, vec!["Tel"]);
    }

    #[test]
    fn test_zero_threshold_never_maps_unrelated_columns() {
        let registry = registry();
        let config = MatchConfig::default()
            .with_acceptance_threshold(0.0)
            .with_advisory_threshold(0.0);
        let mapper = ColumnMapper::with_config(&registry, config);

        let result = mapper.auto_detect(&["", "Favorite Color"], &["email"]);
        assert!(result.mapping.is_empty());
        assert_eq!(result.unmapped_fields, vec!["email"]);
        assert_eq!(result.unmapped_headers, vec!["Favorite Color"]);

        let suggestions = mapper.suggestions_for_field("email", &["", "Favorite Color"], &[]);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_padded_field_names_resolve_to_registry() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let result = mapper.auto_detect(&["Tel"], &[" phone "]);
        assert_eq!(result.column_for("phone"), Some(0));
        approx(result.confidence["phone"], 1.0);
        assert_eq!(result.assignments[0].matched_alias.as_deref(), Some("tel"));

        let best = mapper.find_best_match("Telephone", &[" phone"]);
        assert_eq!(best.field.as_deref(), Some("phone"));
    }

    #[test]
    fn test_custom_acceptance_threshold() {
        let registry = registry();
        let strict = MatchConfig::default().with_acceptance_threshold(0.7);
        let mapper = ColumnMapper::with_config(&registry, strict);

        // "phone" in "phone no" scores 0.625
        let result = mapper.auto_detect(&["Phone No"], &["phone"]);
        assert!(result.mapping.is_empty(), "0.625 is below 0.7");
    }

    #[test]
    fn test_suggestions_rank_and_exclude() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let headers = ["Phone No", "Tel", "Name", "Mobile Number"];
        let suggestions = mapper.suggestions_for_field("phone", &headers, &[1]);
        let indices: Vec<usize> = suggestions.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 3]);
        approx(suggestions[0].score, 0.625);
        approx(suggestions[1].score, 0.5);
        assert_eq!(suggestions[1].header, "Mobile Number");
    }

    #[test]
    fn test_suggestions_top_three() {
        let registry = AliasRegistry::default();
        let mapper = ColumnMapper::new(&registry);

        let headers = [
            "Amount",
            "Amount Paid",
            "Total Amount Due",
            "Amt",
            "Net Amount Payable Now",
        ];
        let suggestions = mapper.suggestions_for_field("amount", &headers, &[]);
        let indices: Vec<usize> = suggestions.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_suggestion_threshold_is_exclusive() {
        let registry = AliasRegistry::default();
        let mapper = ColumnMapper::new(&registry);

        // 4/20 == 0.2 exactly, 4/19 just above
        let headers = ["lime abcdefghijklmno", "lime abcdefghijklmn"];
        let suggestions = mapper.suggestions_for_field("lime", &headers, &[]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].index, 1);
    }

    #[test]
    fn test_suggestions_for_unmapped_skip_used_columns() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);

        let headers = ["Tel", "Phone No"];
        let result = mapper.auto_detect(&headers, &["phone", "email"]);
        assert_eq!(result.column_for("phone"), Some(0));
        assert_eq!(result.column_for("email"), None);

        let suggestions = mapper.suggestions_for_unmapped(&result, &headers);
        assert!(!suggestions.contains_key("phone"));
        assert!(!suggestions.contains_key("email"), "nothing resembles email");
    }

    #[test]
    fn test_score_explains() {
        let registry = registry();
        let mapper = ColumnMapper::new(&registry);
        let score = mapper.score("Parent Mobile", "parentPhone");
        assert_eq!(score.explain(), "exact match on alias 'parent mobile' (1.000)");
    }
}
