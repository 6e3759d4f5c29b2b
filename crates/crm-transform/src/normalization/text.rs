//! Free-text normalization.
//!
//! Contact exports mix full-width and half-width forms, ideographic spaces,
//! and embedded newlines. Every other canonicalization rule builds on the
//! single cleaner here, so the table pipeline applies it to each string cell
//! before any field-specific rule runs.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a free-text value.
///
/// Applies Unicode NFKC normalization so visually or semantically
/// equivalent code points collapse to one representation (full-width
/// letters and digits become ASCII, U+3000 ideographic space becomes an
/// ordinary space), then trims the result and collapses every whitespace
/// run, newlines included, into a single ASCII space.
///
/// Idempotent: normalizing an already-normalized value returns it unchanged.
pub fn normalize_text(value: &str) -> String {
    let folded: String = value.nfkc().collect();
    let mut parts = folded.split_whitespace();
    let mut normalized = String::with_capacity(folded.len());
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}
