use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use crm_ingest::read_contacts_csv;
use crm_model::{CANONICAL_FIELDS, DEFAULT_DUP_KEY};
use crm_report::{write_normalized_csv, write_quality_json};
use crm_transform::normalize_contacts;
use crm_validate::quality_report;

use crate::cli::CleanArgs;
use crate::summary::{apply_table_style, header_cell};
use crate::types::CleanResult;

/// List the canonicalization vocabulary.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Rule"),
        header_cell("Indicator"),
    ]);
    apply_table_style(&mut table);
    for field in CANONICAL_FIELDS {
        table.add_row(vec![
            field.column.to_string(),
            field.kind.label().to_string(),
            field.invalid_column.unwrap_or("-").to_string(),
        ]);
    }
    println!("{table}");
    println!("Default duplicate key: {DEFAULT_DUP_KEY}");
    Ok(())
}

/// Run the full cleansing pipeline over one contact export.
///
/// Stages: ingest, normalize, quality gate, write outputs. Outputs are
/// written even on a failing verdict (the gate only controls the exit
/// status); `--dry-run` skips the writes entirely.
pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let input = &args.input;
    let clean_span = info_span!("clean", input = %input.display());
    let _clean_guard = clean_span.enter();

    let ingest_start = Instant::now();
    let mut df =
        read_contacts_csv(input).with_context(|| format!("ingest {}", input.display()))?;
    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let normalize_start = Instant::now();
    normalize_contacts(&mut df).context("normalize contacts")?;
    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalization complete"
    );

    let report = quality_report(&df, &args.dup_key);
    let quality_failed = !report.passed();

    let mut output = None;
    let mut report_path = None;
    if args.dry_run {
        info!("dry run: skipping output files");
    } else {
        let output_path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input));
        write_normalized_csv(&mut df, &output_path)?;
        info!(path = %output_path.display(), "normalized csv written");
        output = Some(output_path);
        if let Some(path) = &args.report {
            write_quality_json(&report, path)?;
            info!(path = %path.display(), "quality report written");
            report_path = Some(path.clone());
        }
    }

    Ok(CleanResult {
        input: input.clone(),
        rows: df.height(),
        columns: df.width(),
        output,
        report_path,
        report,
        quality_failed,
    })
}

/// Sibling of the input file, `<stem>_clean.csv`.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("contacts");
    input.with_file_name(format!("{stem}_clean.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        let path = default_output_path(Path::new("/data/contacts.csv"));
        assert_eq!(path, Path::new("/data/contacts_clean.csv"));
    }

    #[test]
    fn default_output_without_extension() {
        let path = default_output_path(Path::new("export"));
        assert_eq!(path, Path::new("export_clean.csv"));
    }
}
