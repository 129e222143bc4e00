//! Curated header alias registry for bulk spreadsheet import.
//!
//! This crate provides:
//!
//! - **Built-in alias data** for the students, staff, fees, inventory and
//!   exams verticals, embedded at compile time
//! - **Alias file loading** so other verticals can supply their own dictionary
//! - An immutable [`AliasRegistry`] that matching code borrows read-only
//!
//! # Example
//!
//! ```rust,ignore
//! use colmap_aliases::{AliasRegistry, Vertical};
//!
//! // One vertical: field_names() is its canonical field list.
//! let fees = AliasRegistry::for_vertical(Vertical::Fees)?;
//! for field in fees.field_names() {
//!     println!("{field}: {:?}", fees.aliases(field));
//! }
//!
//! // Everything merged, plus a site-specific extension.
//! let custom = AliasRegistry::builder()
//!     .extend_from(&AliasRegistry::embedded()?)
//!     .field("hostelRoom", ["room no", "hostel room"])
//!     .build()?;
//! ```

pub mod embedded;
pub mod error;
pub mod loader;
pub mod registry;
pub mod vertical;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{RegistryError, Result};
pub use loader::{AliasFile, FieldEntry, parse_alias_file, read_alias_file};
pub use registry::{AliasRegistry, RegistryBuilder};
pub use vertical::Vertical;
