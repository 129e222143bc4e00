//! Smart column matching for bulk spreadsheet import.
//!
//! Maps free-form spreadsheet headers onto a fixed set of canonical fields
//! using an [`AliasRegistry`] of known synonyms and a three-tier similarity
//! heuristic, then resolves conflicts with a deterministic greedy assignment.
//!
//! # Pipeline
//!
//! - [`normalize`]: canonicalize header and alias text
//! - [`score`]: exact / containment / word-overlap similarity, per-field scoring
//! - [`ColumnMapper::find_best_match`]: best field for one header
//! - [`ColumnMapper::auto_detect`]: one-to-one mapping for a whole header row
//! - [`ColumnMapper::suggestions_for_field`]: ranked manual-mapping options
//! - [`confidence_label`]: Excellent / Good / Fair / Low buckets
//!
//! Matching never fails. Unmapped headers and fields are a routine outcome
//! reported in [`MappingResult`]; the caller decides whether a gap matters.
//!
//! # Example
//!
//! ```rust,ignore
//! use colmap_aliases::AliasRegistry;
//! use colmap_match::{ColumnMapper, confidence_label};
//!
//! let registry = AliasRegistry::embedded()?;
//! let mapper = ColumnMapper::new(&registry);
//!
//! let headers = ["Admission No", "Student Name", "Class"];
//! let fields = ["admissionNumber", "studentName", "class"];
//! let result = mapper.auto_detect(&headers, &fields);
//!
//! for assignment in &result.assignments {
//!     println!("{} [{}]", assignment.explain(), confidence_label(assignment.score).label);
//! }
//! for field in &result.unmapped_fields {
//!     println!("{field}: {:?}", mapper.suggestions_for_field(field, &headers, &result.used_columns()));
//! }
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod confidence;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod result;
pub mod score;
pub mod types;

pub use colmap_aliases::AliasRegistry;
pub use config::MatchConfig;
pub use confidence::{ConfidenceLabel, ConfidenceTier, confidence_label};
pub use engine::ColumnMapper;
pub use error::ConfigError;
pub use normalize::{coalesce_headers, normalize};
pub use result::{MappingResult, MappingSummary};
pub use score::{FieldScore, MatchTier, Similarity, compare, score_field, similarity};
pub use types::{Assignment, BestMatch, ColumnSuggestion};
