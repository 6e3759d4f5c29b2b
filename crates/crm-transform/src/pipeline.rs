//! Whole-table normalization.
//!
//! Applies the text normalizer to every string cell, then walks the
//! canonicalization set from `crm-model`: canonicalized columns are replaced
//! with their cleaned values and paired with a Boolean indicator column, and
//! date columns are retyped in place to a typed date (null when blank or
//! unparseable).
//!
//! The walk is schema-tolerant: columns absent from the input are silently
//! skipped, and columns with an unexpected dtype are treated as already
//! canonical and left untouched. Null cells stay null and never raise an
//! indicator.

use anyhow::Result;
use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataFrame, DataType, NamedFrom, Series};
use tracing::{debug, warn};

use crm_model::{CANONICAL_FIELDS, FieldKind, FieldSpec};

use crate::normalization::datetime::{DateOutcome, parse_date};
use crate::normalization::text::normalize_text;
use crate::normalization::{
    Canonicalized, normalize_email, normalize_phone_jp, normalize_postal_jp,
};

/// Normalize a contact table in place.
///
/// Row order and row count are preserved; the only new columns are the
/// indicator columns paired with canonicalized fields that are present.
pub fn normalize_contacts(df: &mut DataFrame) -> Result<()> {
    normalize_text_columns(df)?;
    for field in &CANONICAL_FIELDS {
        match field.kind {
            FieldKind::Email => canonicalize_column(df, field, normalize_email)?,
            FieldKind::PhoneJp => canonicalize_column(df, field, normalize_phone_jp)?,
            FieldKind::PostalJp => canonicalize_column(df, field, normalize_postal_jp)?,
            FieldKind::Date => retype_date_column(df, field.column)?,
        }
    }
    Ok(())
}

/// Run every string cell through the text normalizer, column by column.
fn normalize_text_columns(df: &mut DataFrame) -> Result<()> {
    for name in df.get_column_names_owned() {
        let Some(values) = string_values(df, name.as_str()) else {
            continue;
        };
        let normalized: Vec<Option<String>> = values
            .into_iter()
            .map(|value| value.map(|cell| normalize_text(&cell)))
            .collect();
        df.with_column(Series::new(name.clone(), normalized))?;
    }
    Ok(())
}

/// Replace a column with its canonical values and materialize the paired
/// indicator column. Null cells stay null and are never flagged.
fn canonicalize_column(
    df: &mut DataFrame,
    field: &FieldSpec,
    canonicalize: fn(&str) -> Canonicalized,
) -> Result<()> {
    let Some(values) = string_values(df, field.column) else {
        return Ok(());
    };
    let mut canonical = Vec::with_capacity(values.len());
    let mut invalid = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Some(cell) => {
                let result = canonicalize(&cell);
                canonical.push(Some(result.value));
                invalid.push(result.invalid);
            }
            None => {
                canonical.push(None);
                invalid.push(false);
            }
        }
    }
    df.with_column(Series::new(field.column.into(), canonical))?;
    if let Some(indicator) = field.invalid_column {
        df.with_column(Series::new(indicator.into(), invalid))?;
    }
    Ok(())
}

/// Replace a string date column with a typed date column, null where the
/// value was blank or unrecognized. Lenient-fallback parses are counted and
/// surfaced per column rather than trusted silently.
fn retype_date_column(df: &mut DataFrame, name: &str) -> Result<()> {
    let Some(values) = string_values(df, name) else {
        return Ok(());
    };
    let mut dates: Vec<Option<NaiveDate>> = Vec::with_capacity(values.len());
    let mut lenient = 0usize;
    for value in &values {
        let outcome = match value.as_deref() {
            Some(cell) => parse_date(cell),
            None => DateOutcome::Blank,
        };
        if matches!(outcome, DateOutcome::Lenient(_)) {
            lenient += 1;
        }
        dates.push(outcome.date());
    }
    if lenient > 0 {
        warn!(
            column = name,
            count = lenient,
            "dates accepted by lenient fallback parsing"
        );
    } else {
        debug!(column = name, rows = dates.len(), "date column retyped");
    }
    df.with_column(Series::new(name.into(), dates))?;
    Ok(())
}

/// Cell values of a String-dtype column.
///
/// Returns `None` when the column is absent or holds a non-string type, in
/// which case the caller leaves it untouched.
fn string_values(df: &DataFrame, name: &str) -> Option<Vec<Option<String>>> {
    let column = df.column(name).ok()?;
    if column.dtype() != &DataType::String {
        return None;
    }
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = match column.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::Null => None,
            AnyValue::String(cell) => Some(cell.to_string()),
            AnyValue::StringOwned(cell) => Some(cell.to_string()),
            other => Some(other.to_string()),
        };
        values.push(value);
    }
    Some(values)
}
