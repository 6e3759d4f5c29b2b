//! Quality gate for cleaned contact tables.
//!
//! After normalization the table carries one Boolean `*_invalid` indicator
//! column per validated field. This crate reads those indicators together
//! with null counts and duplicate keys, renders the rates against fixed
//! thresholds, and produces the pass/fail verdict that gates downstream use
//! of the dataset.
//!
//! The gate never mutates the table: a failing dataset is still a valid
//! output artifact, the verdict only controls the process exit status.

pub mod gate;
pub mod metrics;

pub use gate::{Breach, QualityReport, QualityThresholds, Verdict, evaluate, quality_report};
pub use metrics::{QualityMetrics, compute_metrics, format_rate};
