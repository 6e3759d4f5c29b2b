//! Contact data transformation.
//!
//! This crate provides the cleansing logic for contact exports:
//!
//! - **normalization**: scalar cleaners for free text, email addresses,
//!   Japanese phone numbers, Japanese postal codes, and date parsing
//! - **pipeline**: whole-table normalization over a polars `DataFrame`

pub mod normalization;
pub mod pipeline;

pub use normalization::{
    Canonicalized, DateOutcome, normalize_date, normalize_email, normalize_phone_jp,
    normalize_postal_jp, normalize_text, parse_date,
};
pub use pipeline::normalize_contacts;
