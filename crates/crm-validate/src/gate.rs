//! Threshold evaluation and verdict rendering.

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{error, info};

use crm_model::EMAIL_INVALID_COLUMN;

use crate::metrics::{QualityMetrics, compute_metrics, format_rate};

/// Fixed acceptance thresholds for a cleaned dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityThresholds {
    /// Highest tolerated null rate for any column.
    pub max_null_rate: f64,
    /// Highest tolerated duplicate rate on the key column.
    pub max_duplicate_rate: f64,
    /// Highest tolerated invalidity rate, uniform across indicator columns.
    pub max_invalid_rate: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            max_null_rate: 0.02,
            max_duplicate_rate: 0.005,
            max_invalid_rate: 0.01,
        }
    }
}

/// A metric that exceeded its threshold.
#[derive(Debug, Clone, Serialize)]
pub struct Breach {
    /// Which metric breached: `max_null_rate`, `duplicate_rate`, or an
    /// indicator column name.
    pub metric: String,
    /// Observed rate.
    pub rate: f64,
    /// Threshold the rate exceeded.
    pub threshold: f64,
}

/// Gate verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Pass,
    Fail,
}

/// Metrics, thresholds, and the verdict they produce.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub metrics: QualityMetrics,
    pub thresholds: QualityThresholds,
    pub breaches: Vec<Breach>,
    pub verdict: Verdict,
}

impl QualityReport {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}

/// Compare metrics against thresholds.
///
/// Rates equal to a threshold do not breach; only strictly greater rates
/// do. Raising any rate past its threshold can only flip the verdict from
/// pass to fail, never the other way.
pub fn evaluate(metrics: &QualityMetrics, thresholds: &QualityThresholds) -> Vec<Breach> {
    let mut breaches = Vec::new();
    if metrics.max_null_rate > thresholds.max_null_rate {
        breaches.push(Breach {
            metric: "max_null_rate".to_string(),
            rate: metrics.max_null_rate,
            threshold: thresholds.max_null_rate,
        });
    }
    if metrics.duplicate_rate > thresholds.max_duplicate_rate {
        breaches.push(Breach {
            metric: "duplicate_rate".to_string(),
            rate: metrics.duplicate_rate,
            threshold: thresholds.max_duplicate_rate,
        });
    }
    for (column, rate) in &metrics.invalid_rates {
        if *rate > thresholds.max_invalid_rate {
            breaches.push(Breach {
                metric: column.clone(),
                rate: *rate,
                threshold: thresholds.max_invalid_rate,
            });
        }
    }
    breaches
}

/// Compute metrics for a normalized table and render the verdict.
///
/// One report line per metric is emitted through `tracing`; threshold
/// breaches additionally emit error-level lines. The table itself is left
/// untouched, a failing dataset is still written by the caller.
pub fn quality_report(df: &DataFrame, dup_key: &str) -> QualityReport {
    let metrics = compute_metrics(df, dup_key);
    let thresholds = QualityThresholds::default();
    let breaches = evaluate(&metrics, &thresholds);

    info!(rows = metrics.row_count, "quality: row count");
    info!(rate = %format_rate(metrics.max_null_rate), "quality: max null rate");
    info!(
        key = %metrics.duplicate_key,
        rate = %format_rate(metrics.duplicate_rate),
        "quality: duplicate rate"
    );
    info!(
        rate = %format_rate(metrics.email_invalid_rate),
        "quality: email invalid rate"
    );
    for (column, rate) in &metrics.invalid_rates {
        if column == EMAIL_INVALID_COLUMN {
            continue;
        }
        info!(column = %column, rate = %format_rate(*rate), "quality: invalid rate");
    }

    for breach in &breaches {
        error!(
            metric = %breach.metric,
            rate = %format_rate(breach.rate),
            threshold = %format_rate(breach.threshold),
            "quality threshold exceeded"
        );
    }
    let verdict = if breaches.is_empty() {
        Verdict::Pass
    } else {
        error!(breach_count = breaches.len(), "quality gate failed");
        Verdict::Fail
    };

    QualityReport {
        metrics,
        thresholds,
        breaches,
        verdict,
    }
}
