//! CSV reading for contact exports.
//!
//! Dataverse exports carry a fixed header on the first row, sometimes a
//! UTF-8 BOM, and occasionally ragged or fully blank lines. The reader
//! tolerates all of that: blank rows are dropped, short rows are padded to
//! the header width, long rows are truncated, and empty cells become nulls.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use crate::error::IngestError;

/// Read a contact export into a `DataFrame` of String columns.
///
/// Cell values are trimmed but otherwise untouched; Unicode normalization
/// happens later in the transform stage. An empty file yields an empty
/// frame with no columns.
pub fn read_contacts_csv(path: &Path) -> Result<DataFrame, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Record {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        debug!(path = %path.display(), "empty contact export");
        return Ok(DataFrame::empty());
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|raw| normalize_header(raw)).collect();
    let mut columns: Vec<Vec<Option<String>>> =
        vec![Vec::with_capacity(raw_rows.len() - 1); headers.len()];
    for record in raw_rows.iter().skip(1) {
        for (idx, values) in columns.iter_mut().enumerate() {
            let cell = record.get(idx).map(String::as_str).unwrap_or("");
            values.push(if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            });
        }
    }

    let series: Vec<Column> = headers
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    let df = DataFrame::new(series).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "contact export read"
    );
    Ok(df)
}

/// Trim a header cell, strip a UTF-8 BOM, and collapse inner whitespace.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
