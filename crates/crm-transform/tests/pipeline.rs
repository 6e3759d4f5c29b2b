//! Integration tests for whole-table normalization.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use crm_transform::normalize_contacts;

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

fn str_at(df: &DataFrame, name: &str, idx: usize) -> Option<String> {
    match df.column(name).unwrap().get(idx).unwrap() {
        AnyValue::Null => None,
        AnyValue::String(value) => Some(value.to_string()),
        AnyValue::StringOwned(value) => Some(value.to_string()),
        other => panic!("unexpected value in {name}: {other:?}"),
    }
}

fn bool_at(df: &DataFrame, name: &str, idx: usize) -> bool {
    match df.column(name).unwrap().get(idx).unwrap() {
        AnyValue::Boolean(value) => value,
        other => panic!("unexpected value in {name}: {other:?}"),
    }
}

fn days_at(df: &DataFrame, name: &str, idx: usize) -> Option<i32> {
    match df.column(name).unwrap().get(idx).unwrap() {
        AnyValue::Null => None,
        AnyValue::Date(days) => Some(days),
        other => panic!("unexpected value in {name}: {other:?}"),
    }
}

fn epoch_days(year: i32, month: u32, day: u32) -> i32 {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    (date - epoch).num_days() as i32
}

#[test]
fn canonicalizes_email_and_adds_indicator() {
    let mut df = DataFrame::new(vec![string_column(
        "internalemailaddress",
        vec![Some("  Foo@BAR.com "), Some("not-an-email"), None],
    )])
    .unwrap();

    normalize_contacts(&mut df).unwrap();

    assert_eq!(str_at(&df, "internalemailaddress", 0).as_deref(), Some("foo@bar.com"));
    assert_eq!(str_at(&df, "internalemailaddress", 1).as_deref(), Some("not-an-email"));
    assert_eq!(str_at(&df, "internalemailaddress", 2), None);

    assert!(!bool_at(&df, "email_invalid", 0));
    assert!(bool_at(&df, "email_invalid", 1));
    assert!(!bool_at(&df, "email_invalid", 2));
}

#[test]
fn canonicalizes_both_phone_columns() {
    let mut df = DataFrame::new(vec![
        string_column("mobilephone", vec![Some("+81 90 1234 5678"), Some("123")]),
        string_column("address1_telephone1", vec![Some("0312345678"), None]),
    ])
    .unwrap();

    normalize_contacts(&mut df).unwrap();

    assert_eq!(str_at(&df, "mobilephone", 0).as_deref(), Some("090-1234-5678"));
    assert_eq!(str_at(&df, "mobilephone", 1).as_deref(), Some("123"));
    assert!(!bool_at(&df, "mobilephone_invalid", 0));
    assert!(bool_at(&df, "mobilephone_invalid", 1));

    assert_eq!(str_at(&df, "address1_telephone1", 0).as_deref(), Some("031-234-5678"));
    assert!(!bool_at(&df, "address1_telephone1_invalid", 0));
    assert!(!bool_at(&df, "address1_telephone1_invalid", 1));
}

#[test]
fn canonicalizes_postal_code() {
    let mut df = DataFrame::new(vec![string_column(
        "address1_postalcode",
        vec![Some("1000001"), Some("ABC")],
    )])
    .unwrap();

    normalize_contacts(&mut df).unwrap();

    assert_eq!(str_at(&df, "address1_postalcode", 0).as_deref(), Some("100-0001"));
    assert!(!bool_at(&df, "postal_invalid", 0));
    assert_eq!(str_at(&df, "address1_postalcode", 1).as_deref(), Some("ABC"));
    assert!(bool_at(&df, "postal_invalid", 1));
}

#[test]
fn retypes_date_columns() {
    let mut df = DataFrame::new(vec![
        string_column(
            "birthdate",
            vec![Some("2023/01/15"), Some("not a date"), None],
        ),
        string_column("modifiedon", vec![Some("2024-06-01T09:30:00"), Some(""), Some("20240601")]),
    ])
    .unwrap();

    normalize_contacts(&mut df).unwrap();

    assert_eq!(df.column("birthdate").unwrap().dtype(), &DataType::Date);
    assert_eq!(days_at(&df, "birthdate", 0), Some(epoch_days(2023, 1, 15)));
    assert_eq!(days_at(&df, "birthdate", 1), None);
    assert_eq!(days_at(&df, "birthdate", 2), None);

    assert_eq!(days_at(&df, "modifiedon", 0), Some(epoch_days(2024, 6, 1)));
    assert_eq!(days_at(&df, "modifiedon", 1), None);
    assert_eq!(days_at(&df, "modifiedon", 2), Some(epoch_days(2024, 6, 1)));
}

#[test]
fn normalizes_every_string_cell() {
    let mut df = DataFrame::new(vec![string_column(
        "fullname",
        vec![Some("\u{3000}田中\u{3000}太郎\u{3000}"), Some("ＡＢＣ\nＤＥＦ")],
    )])
    .unwrap();

    normalize_contacts(&mut df).unwrap();

    assert_eq!(str_at(&df, "fullname", 0).as_deref(), Some("田中 太郎"));
    assert_eq!(str_at(&df, "fullname", 1).as_deref(), Some("ABC DEF"));
}

#[test]
fn missing_columns_are_skipped() {
    let mut df = DataFrame::new(vec![
        string_column("contactid", vec![Some("c-001"), Some("c-002")]),
        string_column("fullname", vec![Some("Alice"), Some("Bob")]),
    ])
    .unwrap();

    normalize_contacts(&mut df).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 2);
    let names = df.get_column_names_owned();
    assert!(!names.iter().any(|name| name.ends_with("_invalid")));
}

#[test]
fn non_string_columns_pass_through() {
    let mut df = DataFrame::new(vec![
        Column::new("birthdate".into(), [19737_i64, 19738_i64]),
        Column::new("internalemailaddress".into(), [1_i64, 2_i64]),
    ])
    .unwrap();

    normalize_contacts(&mut df).unwrap();

    assert_eq!(df.column("birthdate").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("internalemailaddress").unwrap().dtype(), &DataType::Int64);
    assert!(df.column("email_invalid").is_err());
}

#[test]
fn null_cells_stay_null_and_unflagged() {
    let mut df = DataFrame::new(vec![string_column("mobilephone", vec![None, None])]).unwrap();

    normalize_contacts(&mut df).unwrap();

    assert_eq!(str_at(&df, "mobilephone", 0), None);
    assert!(!bool_at(&df, "mobilephone_invalid", 0));
    assert!(!bool_at(&df, "mobilephone_invalid", 1));
}
