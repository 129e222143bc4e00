//! Error types for alias registry loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or building an alias registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Alias file could not be read.
    #[error("failed to read alias file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Alias file is not valid JSON or does not match the expected shape.
    #[error("failed to parse alias file {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field entry has an empty name.
    #[error("empty field name in {origin}")]
    EmptyFieldName { origin: String },

    /// An alias contains no letters or digits and would never match anything.
    #[error("alias '{alias}' of field '{field}' has no letters or digits")]
    BlankAlias { field: String, alias: String },

    /// The same field is declared twice in one alias file.
    #[error("field '{field}' declared more than once in {origin}")]
    DuplicateField { field: String, origin: String },

    /// Vertical name not recognized.
    #[error("unknown vertical '{name}' (expected one of: students, staff, fees, inventory, exams)")]
    UnknownVertical { name: String },
}

/// Result type for alias registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
