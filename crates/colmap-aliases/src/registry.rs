//! Immutable alias registry.
//!
//! An [`AliasRegistry`] maps canonical field names to the free-text aliases a
//! school or business is known to use for them. It is built once (from the
//! embedded verticals, a caller-supplied file, or a [`RegistryBuilder`]) and
//! then shared read-only by every matching call.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::embedded;
use crate::error::{RegistryError, Result};
use crate::loader::{AliasFile, parse_alias_file, read_alias_file};
use crate::vertical::Vertical;

/// Read-only mapping from canonical field to its ordered aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasRegistry {
    /// Field names in registration order.
    order: Vec<String>,
    /// Field name -> aliases in priority order.
    aliases: BTreeMap<String, Vec<String>>,
}

impl AliasRegistry {
    /// Start building a registry by hand.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry with every built-in vertical merged.
    ///
    /// A field registered by several verticals gets the union of their
    /// aliases, keeping first-seen order.
    pub fn embedded() -> Result<Self> {
        let mut builder = Self::builder();
        for vertical in Vertical::ALL {
            let (origin, content) = embedded::source_for(vertical);
            builder = builder.extend_from_file(&parse_alias_file(origin, content)?);
        }
        let registry = builder.build()?;
        debug!(fields = registry.len(), "loaded embedded alias registry");
        Ok(registry)
    }

    /// Registry for a single built-in vertical.
    ///
    /// [`Self::field_names`] on the result is that vertical's canonical field list.
    pub fn for_vertical(vertical: Vertical) -> Result<Self> {
        let (origin, content) = embedded::source_for(vertical);
        Self::from_json_str(origin, content)
    }

    /// Parse a registry from alias file JSON.
    pub fn from_json_str(origin: &str, content: &str) -> Result<Self> {
        let file = parse_alias_file(origin, content)?;
        Self::builder().extend_from_file(&file).build()
    }

    /// Load a registry from an alias file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = read_alias_file(path.as_ref())?;
        Self::builder().extend_from_file(&file).build()
    }

    /// Aliases registered for `field`, or an empty slice for unknown fields.
    pub fn aliases(&self, field: &str) -> &[String] {
        self.aliases.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `field` is registered.
    pub fn contains(&self, field: &str) -> bool {
        self.aliases.contains_key(field)
    }

    /// Registered field names in registration order.
    pub fn field_names(&self) -> &[String] {
        &self.order
    }

    /// Iterate over `(field, aliases)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.aliases(name)))
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no field is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of aliases across all fields.
    pub fn alias_count(&self) -> usize {
        self.aliases.values().map(Vec::len).sum()
    }
}

/// Incremental builder for [`AliasRegistry`].
///
/// Repeated registrations of the same field are merged; duplicate aliases are
/// dropped. Validation happens in [`RegistryBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    entries: Vec<(String, Vec<String>)>,
}

impl RegistryBuilder {
    /// Register a field with its aliases.
    #[must_use]
    pub fn field<I, S>(mut self, name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((name.into(), aliases.into_iter().map(Into::into).collect()));
        self
    }

    /// Register every field of an existing registry.
    #[must_use]
    pub fn extend_from(mut self, registry: &AliasRegistry) -> Self {
        for (name, aliases) in registry.iter() {
            self.entries.push((name.to_string(), aliases.to_vec()));
        }
        self
    }

    /// Register every field of a parsed alias file.
    #[must_use]
    pub fn extend_from_file(mut self, file: &AliasFile) -> Self {
        for entry in &file.fields {
            self.entries
                .push((entry.name.clone(), entry.aliases.clone()));
        }
        self
    }

    /// Validate and freeze the registry.
    pub fn build(self) -> Result<AliasRegistry> {
        let mut order: Vec<String> = Vec::new();
        let mut aliases: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (raw_name, raw_aliases) in self.entries {
            let name = raw_name.trim().to_string();
            if name.is_empty() {
                return Err(RegistryError::EmptyFieldName {
                    origin: "registry builder".to_string(),
                });
            }
            if !aliases.contains_key(&name) {
                order.push(name.clone());
            }
            let known = aliases.entry(name.clone()).or_default();
            for raw_alias in raw_aliases {
                let alias = raw_alias.trim();
                if !alias.chars().any(|c| c.is_ascii_alphanumeric()) {
                    return Err(RegistryError::BlankAlias {
                        field: name,
                        alias: raw_alias,
                    });
                }
                if !known.iter().any(|existing| existing == alias) {
                    known.push(alias.to_string());
                }
            }
        }

        Ok(AliasRegistry { order, aliases })
    }
}
