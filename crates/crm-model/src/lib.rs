//! Data model definitions for CRM contact cleansing.
//!
//! The pipeline operates on a fixed, known set of Dataverse contact columns.
//! This crate is the single source of truth for that vocabulary: which
//! columns are canonicalized, by which rule, and what their paired
//! invalidity-indicator columns are called.

pub mod schema;

pub use schema::{
    CANONICAL_FIELDS, DATE_COLUMNS, DEFAULT_DUP_KEY, EMAIL_COLUMN, EMAIL_INVALID_COLUMN,
    FieldKind, FieldSpec, INVALID_SUFFIX, PHONE_COLUMNS, POSTAL_COLUMN, POSTAL_INVALID_COLUMN,
};
