//! Header row extraction from delimited files.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use csv::ReaderBuilder;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Parse a `--delimiter` value.
///
/// Accepts a single ASCII character, or `tab` / `\t`.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(anyhow!(
                    "delimiter must be a single ASCII character, got {value:?}"
                )),
            }
        }
    }
}

/// Delimiter implied by a file extension: tab for `.tsv`, comma otherwise.
pub fn default_delimiter(path: &Path) -> u8 {
    let is_tsv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
    if is_tsv { b'\t' } else { b',' }
}

/// Read the first record of a delimited file as the header row.
///
/// Cells are returned as written (no trimming) so column indices line up with
/// the sheet. A leading byte-order mark is dropped.
pub fn read_header_row(path: &Path, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;

    let Some(record) = reader.records().next() else {
        bail!("{} has no header row", path.display());
    };
    let record = record.with_context(|| format!("read header row of {}", path.display()))?;

    let headers: Vec<String> = record
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            if index == 0 {
                cell.trim_start_matches(UTF8_BOM).to_string()
            } else {
                cell.to_string()
            }
        })
        .collect();
    debug!(path = %path.display(), columns = headers.len(), "read header row");
    Ok(headers)
}
