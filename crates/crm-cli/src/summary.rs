use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crm_validate::format_rate;

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.report_path {
        println!("Quality report: {}", path.display());
    }

    let metrics = &result.report.metrics;
    let thresholds = &result.report.thresholds;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Value"),
        header_cell("Threshold"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new(metrics.row_count),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table.add_row(rate_row(
        "Max null rate",
        metrics.max_null_rate,
        thresholds.max_null_rate,
    ));
    table.add_row(rate_row(
        &format!("Duplicate rate ({})", metrics.duplicate_key),
        metrics.duplicate_rate,
        thresholds.max_duplicate_rate,
    ));
    for (column, rate) in &metrics.invalid_rates {
        table.add_row(rate_row(column, *rate, thresholds.max_invalid_rate));
    }
    table.add_row(vec![
        Cell::new("Verdict").add_attribute(Attribute::Bold),
        verdict_cell(result.quality_failed),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn rate_row(label: &str, rate: f64, threshold: f64) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(format_rate(rate)),
        Cell::new(format_rate(threshold)),
        status_cell(rate > threshold),
    ]
}

fn status_cell(breached: bool) -> Cell {
    if breached {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("OK").fg(Color::Green)
    }
}

fn verdict_cell(failed: bool) -> Cell {
    if failed {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("PASS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
