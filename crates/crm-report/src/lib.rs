//! Output artifacts for a cleansing run.
//!
//! Two files can be produced per run: the normalized contact table as CSV
//! (always, unless the caller is doing a dry run) and a machine-readable
//! JSON rendering of the quality report. Writing happens after the gate has
//! rendered its verdict; a failing dataset is still written so it can be
//! inspected downstream.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use crm_validate::QualityReport;

/// Write the normalized table as CSV.
///
/// Date columns are rendered in ISO form; null cells are written empty.
pub fn write_normalized_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create output csv {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("write normalized csv {}", path.display()))?;
    debug!(path = %path.display(), rows = df.height(), "normalized csv written");
    Ok(())
}

/// Write the quality report as pretty-printed JSON.
pub fn write_quality_json(report: &QualityReport, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create quality report {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("write quality report {}", path.display()))?;
    debug!(path = %path.display(), "quality report written");
    Ok(())
}
