//! Contact export ingestion.
//!
//! Reads the CSV file produced by the upstream export step into a polars
//! `DataFrame` of all-String columns. Empty cells become nulls so that the
//! downstream quality gate can count them as missing.

pub mod csv_table;
pub mod error;

pub use csv_table::read_contacts_csv;
pub use error::IngestError;
