//! File round-trips for the output writers.

use std::fs;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;

use crm_report::{write_normalized_csv, write_quality_json};
use crm_transform::normalize_contacts;
use crm_validate::quality_report;

fn string_column(name: &str, values: Vec<Option<&str>>) -> Column {
    Series::new(
        name.into(),
        values
            .into_iter()
            .map(|value| value.map(String::from))
            .collect::<Vec<_>>(),
    )
    .into_column()
}

#[test]
fn normalized_csv_round_trip() {
    let mut df = DataFrame::new(vec![
        string_column("contactid", vec![Some("c-001"), Some("c-002")]),
        string_column(
            "internalemailaddress",
            vec![Some("Alice@Example.com"), None],
        ),
        string_column("birthdate", vec![Some("1990/01/15"), Some("")]),
    ])
    .unwrap();
    normalize_contacts(&mut df).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts_clean.csv");
    write_normalized_csv(&mut df, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let mut lines = written.lines();
    let header = lines.next().unwrap();
    assert!(header.contains("internalemailaddress"));
    assert!(header.contains("email_invalid"));
    let first = lines.next().unwrap();
    assert!(first.contains("alice@example.com"));
    assert!(first.contains("1990-01-15"));
    assert_eq!(lines.count(), 1);
}

#[test]
fn quality_json_is_machine_readable() {
    let mut df = DataFrame::new(vec![
        string_column("contactid", vec![Some("c-001"), Some("c-001")]),
        string_column(
            "internalemailaddress",
            vec![Some("alice@example.com"), Some("not-an-email")],
        ),
    ])
    .unwrap();
    normalize_contacts(&mut df).unwrap();
    let report = quality_report(&df, "contactid");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quality.json");
    write_quality_json(&report, &path).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["metrics"]["row_count"], 2);
    assert_eq!(parsed["verdict"], "Fail");
    assert_eq!(parsed["metrics"]["invalid_rates"]["email_invalid"], 0.5);
    assert!(parsed["breaches"].as_array().unwrap().len() >= 2);
}

#[test]
fn create_error_carries_the_path() {
    let mut df = DataFrame::new(vec![string_column("contactid", vec![Some("c-001")])]).unwrap();

    let error = write_normalized_csv(&mut df, std::path::Path::new("/no/such/dir/out.csv"))
        .unwrap_err();
    assert!(error.to_string().contains("/no/such/dir/out.csv"));
}
