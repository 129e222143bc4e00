//! Sanity checks over the embedded alias data.

use std::collections::BTreeSet;

use colmap_aliases::{AliasRegistry, Vertical, embedded, parse_alias_file};

#[test]
fn every_vertical_loads() {
    for vertical in Vertical::ALL {
        let registry = AliasRegistry::for_vertical(vertical)
            .unwrap_or_else(|e| panic!("{vertical} failed to load: {e}"));
        assert!(!registry.is_empty(), "{vertical} has no fields");
    }
}

#[test]
fn declared_vertical_matches_file() {
    for vertical in Vertical::ALL {
        let (origin, content) = embedded::source_for(vertical);
        let file = parse_alias_file(origin, content).unwrap();
        assert_eq!(file.vertical.as_deref(), Some(vertical.as_str()));
        assert!(file.description.is_some());
    }
}

#[test]
fn every_field_has_aliases() {
    let registry = AliasRegistry::embedded().unwrap();
    for (field, aliases) in registry.iter() {
        assert!(!aliases.is_empty(), "{field} has no aliases");
    }
}

#[test]
fn aliases_are_lowercase_plain_text() {
    let registry = AliasRegistry::embedded().unwrap();
    for (field, aliases) in registry.iter() {
        for alias in aliases {
            assert!(
                alias
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '),
                "{field}: alias '{alias}' should already be in normalized form"
            );
        }
    }
}

#[test]
fn merged_registry_covers_every_vertical() {
    let merged = AliasRegistry::embedded().unwrap();
    let mut expected = BTreeSet::new();
    for vertical in Vertical::ALL {
        let registry = AliasRegistry::for_vertical(vertical).unwrap();
        expected.extend(registry.field_names().iter().cloned());
    }
    let actual: BTreeSet<String> = merged.field_names().iter().cloned().collect();
    assert_eq!(actual, expected);
    assert_eq!(merged.len(), expected.len());
}

#[test]
fn loads_custom_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transport.json");
    std::fs::write(
        &path,
        r#"{
  "vertical": "transport",
  "fields": [
    { "name": "routeNumber", "aliases": ["route no", "bus route"] },
    { "name": "stopName", "aliases": ["stop", "pickup point"] }
  ]
}"#,
    )
    .unwrap();

    let registry = AliasRegistry::from_path(&path).unwrap();
    assert_eq!(registry.field_names(), ["routeNumber", "stopName"]);
    assert_eq!(registry.aliases("stopName"), ["stop", "pickup point"]);
}
