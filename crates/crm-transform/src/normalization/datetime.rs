//! Multi-format date parsing.
//!
//! Contact exports carry dates in several shapes (ISO, slash- and
//! dot-separated, compact numeric, datetime, US and day-first orderings).
//! Parsing is strict-first: a fixed, ordered format table is tried before
//! any lenient guessing, so a known format always wins over a heuristic.
//! The US `%m/%d/%Y` form is deliberately tried before the day-first form;
//! that ordering is part of the contract and resolves ambiguous values.

use chrono::{NaiveDate, NaiveDateTime};

use crate::normalization::text::normalize_text;

/// How a date string was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    /// Matched one of the fixed formats.
    Exact(NaiveDate),
    /// Only the lenient fallback recognized the value.
    Lenient(NaiveDate),
    /// Blank input; carries no date.
    Blank,
    /// No parser recognized the value; carries no date.
    Unrecognized,
}

impl DateOutcome {
    /// The parsed date, if any.
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            DateOutcome::Exact(date) | DateOutcome::Lenient(date) => Some(date),
            DateOutcome::Blank | DateOutcome::Unrecognized => None,
        }
    }
}

enum Pattern {
    Date(&'static str),
    DateTime(&'static str),
}

/// The fixed format table, tried in order; the first match wins and only
/// the date component is kept.
const STRICT_FORMATS: [Pattern; 8] = [
    Pattern::Date("%Y-%m-%d"),
    Pattern::Date("%Y/%m/%d"),
    Pattern::Date("%Y.%m.%d"),
    Pattern::Date("%Y%m%d"),
    Pattern::DateTime("%Y-%m-%dT%H:%M:%S"),
    Pattern::DateTime("%Y-%m-%d %H:%M:%S"),
    Pattern::Date("%m/%d/%Y"),
    Pattern::Date("%d/%m/%Y"),
];

/// Shapes the strict table does not cover but real exports still contain.
/// Matches here are reported separately so the caller can surface them.
const LENIENT_FORMATS: [Pattern; 10] = [
    Pattern::DateTime("%Y-%m-%dT%H:%M:%S%.f"),
    Pattern::DateTime("%Y-%m-%dT%H:%M"),
    Pattern::DateTime("%Y/%m/%d %H:%M:%S"),
    Pattern::DateTime("%m/%d/%Y %H:%M:%S"),
    Pattern::Date("%d-%b-%Y"),
    Pattern::Date("%d %b %Y"),
    Pattern::Date("%b %d, %Y"),
    Pattern::Date("%B %d, %Y"),
    Pattern::Date("%Y-%b-%d"),
    Pattern::Date("%d-%m-%Y"),
];

fn try_formats(value: &str, formats: &[Pattern]) -> Option<NaiveDate> {
    for pattern in formats {
        match pattern {
            Pattern::Date(fmt) => {
                if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
                    return Some(date);
                }
            }
            Pattern::DateTime(fmt) => {
                if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                    return Some(dt.date());
                }
            }
        }
    }
    None
}

/// Parse a date-like string, reporting which path resolved it.
///
/// Blank input yields [`DateOutcome::Blank`], not an error. The value is
/// text-normalized first (folding full-width digits and separators), then
/// run through [`STRICT_FORMATS`]; only when no fixed format matches is the
/// lenient table consulted.
pub fn parse_date(value: &str) -> DateOutcome {
    if value.trim().is_empty() {
        return DateOutcome::Blank;
    }
    let cleaned = normalize_text(value);
    if let Some(date) = try_formats(&cleaned, &STRICT_FORMATS) {
        return DateOutcome::Exact(date);
    }
    if let Some(date) = try_formats(&cleaned, &LENIENT_FORMATS) {
        return DateOutcome::Lenient(date);
    }
    DateOutcome::Unrecognized
}

/// Parse a date-like string to its date component, if any.
pub fn normalize_date(value: &str) -> Option<NaiveDate> {
    parse_date(value).date()
}
