//! Tiered string similarity and per-field scoring.
//!
//! Similarity is computed in three explicit tiers, checked in order:
//!
//! 1. **Exact**: identical normalized forms score `1.0`.
//! 2. **Containment**: one normalized form is a substring of the other;
//!    scores `min(len) / max(len)`.
//! 3. **Word overlap**: shared words (length > 1) over the size of the larger
//!    word set.
//!
//! The tier order is what keeps tie-breaks predictable; a continuous metric
//! such as edit distance would move aliases across the acceptance boundary.

use std::fmt;

use colmap_aliases::AliasRegistry;
use serde::{Deserialize, Serialize};

use crate::normalize::{normalize, word_set};

/// Which similarity tier produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchTier {
    /// Nothing in common (or an empty input).
    None,
    /// Some shared words.
    WordOverlap,
    /// One string contains the other.
    Containment,
    /// Identical after normalization.
    Exact,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "no",
            Self::WordOverlap => "word overlap",
            Self::Containment => "containment",
            Self::Exact => "exact",
        })
    }
}

/// A similarity score together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Similarity {
    /// Score in `[0, 1]`.
    pub score: f64,
    /// Tier that produced the score.
    pub tier: MatchTier,
}

impl Similarity {
    const NONE: Self = Self {
        score: 0.0,
        tier: MatchTier::None,
    };

    const EXACT: Self = Self {
        score: 1.0,
        tier: MatchTier::Exact,
    };
}

/// Similarity of two raw strings in `[0, 1]`.
///
/// Strings that normalize to empty score `0` even against each other, so
/// `similarity("", "")` and `similarity("---", "---")` are both `0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    compare(a, b).score
}

/// Similarity of two raw strings, with the tier that produced it.
///
/// An empty normalized side gives score `0` with [`MatchTier::None`], even
/// when both sides are identical.
pub fn compare(a: &str, b: &str) -> Similarity {
    compare_normalized(&normalize(a), &normalize(b))
}

/// Tiered comparison of two already-normalized strings.
///
/// An empty side never matches, so blank headers score `0`.
pub fn compare_normalized(a: &str, b: &str) -> Similarity {
    if a.is_empty() || b.is_empty() {
        return Similarity::NONE;
    }
    if a == b {
        return Similarity::EXACT;
    }
    if a.contains(b) || b.contains(a) {
        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        return Similarity {
            score: short.len() as f64 / long.len() as f64,
            tier: MatchTier::Containment,
        };
    }

    let words_a = word_set(a);
    let words_b = word_set(b);
    if words_a.is_empty() || words_b.is_empty() {
        return Similarity::NONE;
    }
    let shared = words_a.intersection(&words_b).count();
    if shared == 0 {
        return Similarity::NONE;
    }
    Similarity {
        score: shared as f64 / words_a.len().max(words_b.len()) as f64,
        tier: MatchTier::WordOverlap,
    }
}

/// Score of one header against one field, with the text that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldScore {
    /// Canonical field name.
    pub field: String,
    /// Best score over the field name and its aliases.
    pub score: f64,
    /// Tier of the winning comparison.
    pub tier: MatchTier,
    /// Alias that produced the score, or `None` for the field name itself.
    pub matched_alias: Option<String>,
}

impl FieldScore {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        let source = match &self.matched_alias {
            Some(alias) => format!("alias '{alias}'"),
            None => "field name".to_string(),
        };
        format!("{} match on {source} ({:.3})", self.tier, self.score)
    }
}

/// Score a raw header against a single field.
pub fn score_field(registry: &AliasRegistry, header: &str, field: &str) -> FieldScore {
    let profile = FieldProfile::new(field, registry);
    let hit = profile.score(&normalize(header));
    FieldScore {
        field: field.to_string(),
        score: hit.score,
        tier: hit.tier,
        matched_alias: hit.alias.map(str::to_string),
    }
}

/// A field with its name and aliases normalized once for repeated scoring.
#[derive(Debug, Clone)]
pub(crate) struct FieldProfile<'a> {
    pub(crate) name: &'a str,
    normalized: String,
    aliases: Vec<(&'a str, String)>,
}

/// Internal result of scoring a normalized header against a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProfileHit<'a> {
    pub(crate) score: f64,
    pub(crate) tier: MatchTier,
    pub(crate) alias: Option<&'a str>,
}

impl<'a> FieldProfile<'a> {
    pub(crate) fn new(name: &'a str, registry: &'a AliasRegistry) -> Self {
        let name = name.trim();
        Self {
            name,
            normalized: normalize(name),
            aliases: registry
                .aliases(name)
                .iter()
                .map(|alias| (alias.as_str(), normalize(alias)))
                .collect(),
        }
    }

    /// Best score of `header` (already normalized) against this field.
    ///
    /// An alias equal to the header short-circuits to `1.0`.
    pub(crate) fn score(&self, header: &str) -> ProfileHit<'a> {
        if header.is_empty() {
            return ProfileHit {
                score: 0.0,
                tier: MatchTier::None,
                alias: None,
            };
        }
        if let Some((alias, _)) = self.aliases.iter().find(|(_, norm)| norm == header) {
            return ProfileHit {
                score: 1.0,
                tier: MatchTier::Exact,
                alias: Some(*alias),
            };
        }

        let base = compare_normalized(header, &self.normalized);
        let mut best = ProfileHit {
            score: base.score,
            tier: base.tier,
            alias: None,
        };
        for (alias, norm) in &self.aliases {
            let sim = compare_normalized(header, norm);
            if sim.score > best.score {
                best = ProfileHit {
                    score: sim.score,
                    tier: sim.tier,
                    alias: Some(*alias),
                };
            }
        }
        best
    }
}
