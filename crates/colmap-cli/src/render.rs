//! Terminal and JSON rendering of mapping results.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use colmap_aliases::AliasRegistry;
use colmap_match::{
    BestMatch, ColumnSuggestion, ConfidenceTier, MappingResult, MappingSummary, confidence_label,
};

/// Everything `colmap map --json` prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapReport<'a> {
    pub headers: &'a [String],
    #[serde(flatten)]
    pub result: &'a MappingResult,
    pub suggestions: &'a BTreeMap<String, Vec<ColumnSuggestion>>,
    pub summary: MappingSummary,
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Accepted pairs, left to right by column.
pub fn mapping_table(result: &MappingResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Header"),
        header_cell("Field"),
        header_cell("Score"),
        header_cell("Confidence"),
        header_cell("Matched on"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut assignments: Vec<_> = result.assignments.iter().collect();
    assignments.sort_by_key(|a| a.column_index);
    for assignment in assignments {
        let matched_on = match &assignment.matched_alias {
            Some(alias) => format!("{} '{alias}'", assignment.tier),
            None => format!("{} field name", assignment.tier),
        };
        table.add_row(vec![
            Cell::new(assignment.column_index),
            Cell::new(&assignment.header),
            Cell::new(&assignment.field).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", assignment.score)),
            confidence_cell(assignment.score),
            dim_cell(matched_on),
        ]);
    }
    table
}

/// Unmapped fields with their best manual-mapping options.
///
/// `None` when every field was mapped.
pub fn unmapped_table(
    result: &MappingResult,
    suggestions: &BTreeMap<String, Vec<ColumnSuggestion>>,
) -> Option<Table> {
    if result.unmapped_fields.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Unmapped field"), header_cell("Suggestions")]);
    apply_table_style(&mut table);

    for field in &result.unmapped_fields {
        let options = suggestions
            .get(field)
            .map(|list| {
                list.iter()
                    .map(suggestion_text)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        let options_cell = if options.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(options)
        };
        table.add_row(vec![Cell::new(field).fg(Color::Yellow), options_cell]);
    }
    Some(table)
}

/// Canonical fields and their aliases in registration order.
pub fn fields_table(registry: &AliasRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Aliases")]);
    apply_table_style(&mut table);
    for (field, aliases) in registry.iter() {
        table.add_row(vec![
            Cell::new(field).add_attribute(Attribute::Bold),
            Cell::new(aliases.join(", ")),
        ]);
    }
    table
}

/// One-line outcome of `colmap match`.
pub fn best_match_line(header: &str, best: &BestMatch) -> String {
    let label = confidence_label(best.score).label;
    match &best.field {
        Some(field) => format!("'{header}' -> {field} ({:.3}, {label})", best.score),
        None => format!(
            "'{header}' -> no match (best score {:.3}, {label})",
            best.score
        ),
    }
}

/// Counts line printed under the tables.
pub fn summary_line(result: &MappingResult) -> String {
    let summary = result.summary();
    let mut line = format!(
        "{} of {} fields mapped",
        summary.mapped, summary.total_fields
    );
    if let Some(mean) = result.mean_confidence() {
        line.push_str(&format!(" (mean confidence {mean:.3})"));
    }
    line.push_str(&format!(
        "; {} header{} unmapped",
        summary.unmapped_headers,
        if summary.unmapped_headers == 1 { "" } else { "s" }
    ));
    line
}

fn suggestion_text(suggestion: &ColumnSuggestion) -> String {
    format!(
        "[{}] {} ({:.3})",
        suggestion.index, suggestion.header, suggestion.score
    )
}

fn confidence_cell(score: f64) -> Cell {
    let label = confidence_label(score);
    let color = match label.tier {
        ConfidenceTier::Excellent => Color::Green,
        ConfidenceTier::Good => Color::Cyan,
        ConfidenceTier::Fair => Color::Yellow,
        ConfidenceTier::Low => Color::Red,
    };
    Cell::new(label.label).fg(color)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
