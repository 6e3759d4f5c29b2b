//! Email address canonicalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalization::Canonicalized;
use crate::normalization::text::normalize_text;

/// Minimal address shape: a local part, exactly one `@`, a dotted domain,
/// and no whitespace anywhere.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

/// Canonicalize an email address.
///
/// Empty input is "not applicable" and passes through untouched and valid.
/// Everything else is text-normalized and lower-cased, then checked against
/// [`EMAIL_RE`]. The cleaned value is returned even when the check fails so
/// downstream consumers can inspect both the value and the flag.
pub fn normalize_email(value: &str) -> Canonicalized {
    if value.is_empty() {
        return Canonicalized::unchanged(value);
    }
    let canonical = normalize_text(value).to_lowercase();
    let invalid = !EMAIL_RE.is_match(&canonical);
    Canonicalized {
        value: canonical,
        invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_cases_and_trims() {
        let result = normalize_email("  Foo@BAR.com ");
        assert_eq!(result.value, "foo@bar.com");
        assert!(!result.invalid);
    }

    #[test]
    fn folds_full_width_input() {
        let result = normalize_email("ｆｏｏ＠ｂａｒ．ｃｏｍ");
        assert_eq!(result.value, "foo@bar.com");
        assert!(!result.invalid);
    }

    #[test]
    fn flags_malformed_addresses() {
        assert!(normalize_email("not-an-email").invalid);
        assert!(normalize_email("two@@signs.com").invalid);
        assert!(normalize_email("no-dot@domain").invalid);
        assert!(normalize_email("spaced out@example.com").invalid);
    }

    #[test]
    fn keeps_cleaned_value_when_invalid() {
        let result = normalize_email("  NOT-AN-EMAIL ");
        assert_eq!(result.value, "not-an-email");
        assert!(result.invalid);
    }

    #[test]
    fn empty_passes_through() {
        let result = normalize_email("");
        assert_eq!(result.value, "");
        assert!(!result.invalid);
    }

    #[test]
    fn whitespace_only_is_invalid() {
        // Only the truly empty string is "not applicable"; blanks normalize
        // to empty and fail the pattern.
        assert!(normalize_email("   ").invalid);
    }
}
