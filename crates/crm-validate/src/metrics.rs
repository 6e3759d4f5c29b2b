//! Aggregate statistics over a normalized contact table.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{AnyValue, DataFrame};
use serde::Serialize;

use crm_model::{EMAIL_INVALID_COLUMN, INVALID_SUFFIX};

/// Read-only snapshot of per-run quality statistics.
///
/// Computed fresh from the normalized table on every run; nothing here is
/// cached or carried across runs. All rates use `max(rows, 1)` as the
/// denominator so an empty table reports 0% rather than dividing by zero.
#[derive(Debug, Clone, Serialize)]
pub struct QualityMetrics {
    /// Number of rows in the table.
    pub row_count: usize,
    /// Null rate per column.
    pub null_rates: BTreeMap<String, f64>,
    /// Highest null rate across all columns.
    pub max_null_rate: f64,
    /// Column used for duplicate detection.
    pub duplicate_key: String,
    /// Share of rows repeating an earlier non-missing key value.
    pub duplicate_rate: f64,
    /// Invalidity rate of the email indicator column, 0 when absent.
    pub email_invalid_rate: f64,
    /// Invalidity rate per indicator column, email included.
    pub invalid_rates: BTreeMap<String, f64>,
}

/// Compute quality statistics for a normalized table.
///
/// The duplicate key column may be absent, in which case the duplicate rate
/// is 0. Rows whose key value is null or blank are never counted as
/// duplicates of each other.
pub fn compute_metrics(df: &DataFrame, dup_key: &str) -> QualityMetrics {
    let row_count = df.height();
    let denominator = row_count.max(1) as f64;

    let mut null_rates = BTreeMap::new();
    for column in df.get_columns() {
        null_rates.insert(
            column.name().to_string(),
            column.null_count() as f64 / denominator,
        );
    }
    let max_null_rate = null_rates.values().copied().fold(0.0, f64::max);

    let duplicate_rate = count_duplicate_keys(df, dup_key) as f64 / denominator;

    let mut invalid_rates = BTreeMap::new();
    for column in df.get_columns() {
        let name = column.name().as_str();
        if !name.ends_with(INVALID_SUFFIX) {
            continue;
        }
        let mut flagged = 0usize;
        for idx in 0..row_count {
            if matches!(
                column.get(idx).unwrap_or(AnyValue::Null),
                AnyValue::Boolean(true)
            ) {
                flagged += 1;
            }
        }
        invalid_rates.insert(name.to_string(), flagged as f64 / denominator);
    }
    let email_invalid_rate = invalid_rates
        .get(EMAIL_INVALID_COLUMN)
        .copied()
        .unwrap_or(0.0);

    QualityMetrics {
        row_count,
        null_rates,
        max_null_rate,
        duplicate_key: dup_key.to_string(),
        duplicate_rate,
        email_invalid_rate,
        invalid_rates,
    }
}

/// Count rows sharing a key value with an earlier row.
fn count_duplicate_keys(df: &DataFrame, dup_key: &str) -> usize {
    let Ok(column) = df.column(dup_key) else {
        return 0;
    };
    let mut seen = BTreeSet::new();
    let mut duplicates = 0usize;
    for idx in 0..df.height() {
        let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.insert(trimmed.to_string()) {
            duplicates += 1;
        }
    }
    duplicates
}

fn any_to_string(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Render a fractional rate as a percentage with two decimals.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}
