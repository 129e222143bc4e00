//! Alias file parsing.
//!
//! # File format
//!
//! ```json
//! {
//!   "vertical": "students",
//!   "description": "Student admission registers",
//!   "fields": [
//!     { "name": "admissionNumber", "aliases": ["admission no", "adm no"] }
//!   ]
//! }
//! ```
//!
//! `vertical` and `description` are informational. A field may omit
//! `aliases`, in which case only its own name is matched.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RegistryError, Result};

/// Parsed contents of one alias file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasFile {
    /// Vertical this file belongs to, if declared.
    #[serde(default)]
    pub vertical: Option<String>,
    /// Free-text description of the source registers.
    #[serde(default)]
    pub description: Option<String>,
    /// Field entries in canonical order.
    pub fields: Vec<FieldEntry>,
}

/// One canonical field and its aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// Canonical field identifier (e.g. `admissionNumber`).
    pub name: String,
    /// Free-text synonyms, in priority order.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Parse an alias file from a JSON string.
///
/// `origin` names the source in error messages (a file name or path).
/// Rejects empty field names and fields declared twice; alias content is
/// validated later when the registry is built.
pub fn parse_alias_file(origin: &str, content: &str) -> Result<AliasFile> {
    let file: AliasFile =
        serde_json::from_str(content).map_err(|source| RegistryError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    let mut seen = BTreeSet::new();
    for entry in &file.fields {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyFieldName {
                origin: origin.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(RegistryError::DuplicateField {
                field: name.to_string(),
                origin: origin.to_string(),
            });
        }
    }

    debug!(
        origin,
        vertical = file.vertical.as_deref().unwrap_or("-"),
        fields = file.fields.len(),
        "parsed alias file"
    );
    Ok(file)
}

/// Read and parse an alias file from disk.
pub fn read_alias_file(path: &Path) -> Result<AliasFile> {
    let content = fs::read_to_string(path).map_err(|source| RegistryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_alias_file(&path.display().to_string(), &content)
}
