use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use colmap_aliases::{AliasRegistry, Vertical};
use colmap_cli::headers::{default_delimiter, parse_delimiter, read_header_row};
use colmap_cli::render::{
    MapReport, best_match_line, fields_table, mapping_table, summary_line, unmapped_table,
};
use colmap_match::{ColumnMapper, MatchConfig};

use crate::cli::{FieldSource, FieldsArgs, MapArgs, MatchArgs};

pub fn run_map(args: &MapArgs) -> Result<()> {
    let span = info_span!("map", path = %args.csv.display());
    let _guard = span.enter();

    let registry = load_registry(
        args.source.vertical.map(Vertical::from),
        args.source.aliases.as_deref(),
    )?;
    let fields = resolve_fields(&args.source, &registry);
    let config = load_config(args.config.as_deref())?;
    let delimiter = match &args.delimiter {
        Some(value) => parse_delimiter(value)?,
        None => default_delimiter(&args.csv),
    };
    let headers = read_header_row(&args.csv, delimiter)?;
    info!(headers = headers.len(), fields = fields.len(), "matching header row");

    let mapper = ColumnMapper::with_config(&registry, config);
    let result = mapper.auto_detect(&headers, &fields);
    let suggestions = mapper.suggestions_for_unmapped(&result, &headers);

    if args.json {
        let report = MapReport {
            headers: &headers,
            result: &result,
            suggestions: &suggestions,
            summary: result.summary(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize mapping report")?
        );
        return Ok(());
    }

    println!("File: {}", args.csv.display());
    println!("{}", mapping_table(&result));
    if let Some(table) = unmapped_table(&result, &suggestions) {
        println!("{table}");
    }
    if !result.unmapped_headers.is_empty() {
        println!("Unmapped headers: {}", result.unmapped_headers.join(", "));
    }
    println!("{}", summary_line(&result));
    Ok(())
}

pub fn run_match(args: &MatchArgs) -> Result<()> {
    let registry = load_registry(
        args.source.vertical.map(Vertical::from),
        args.source.aliases.as_deref(),
    )?;
    let fields = resolve_fields(&args.source, &registry);
    let config = load_config(args.config.as_deref())?;

    let mapper = ColumnMapper::with_config(&registry, config);
    let best = mapper.find_best_match(&args.header, &fields);
    println!("{}", best_match_line(&args.header, &best));
    if let Some(field) = &best.field {
        println!("  {}", mapper.score(&args.header, field).explain());
    }
    Ok(())
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let registry = load_registry(args.vertical.map(Vertical::from), args.aliases.as_deref())?;
    println!("{}", fields_table(&registry));
    println!(
        "{} fields, {} aliases",
        registry.len(),
        registry.alias_count()
    );
    Ok(())
}

fn load_registry(vertical: Option<Vertical>, aliases: Option<&Path>) -> Result<AliasRegistry> {
    match (aliases, vertical) {
        (Some(path), _) => AliasRegistry::from_path(path)
            .with_context(|| format!("load alias file {}", path.display())),
        (None, Some(vertical)) => AliasRegistry::for_vertical(vertical)
            .with_context(|| format!("load {vertical} aliases")),
        (None, None) => AliasRegistry::embedded().context("load built-in aliases"),
    }
}

/// Explicit `--field` values, or every field the registry knows.
fn resolve_fields(source: &FieldSource, registry: &AliasRegistry) -> Vec<String> {
    if source.fields.is_empty() {
        return registry.field_names().to_vec();
    }
    for field in &source.fields {
        if !registry.contains(field) {
            warn!(field = %field, "field has no aliases; matching on its name only");
        }
    }
    source.fields.clone()
}

fn load_config(path: Option<&Path>) -> Result<MatchConfig> {
    let Some(path) = path else {
        return Ok(MatchConfig::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    MatchConfig::from_json_str(&content)
        .with_context(|| format!("parse config {}", path.display()))
}
