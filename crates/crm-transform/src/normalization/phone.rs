//! Japanese phone number canonicalization.

use crate::normalization::Canonicalized;

/// Canonicalize a Japanese phone number.
///
/// Strips everything but ASCII digits, undoes a leading `81` country code
/// by restoring the domestic leading zero, and reformats to the domestic
/// `XXX-XXX-XXXX` (10 digits) or `XXX-XXXX-XXXX` (11 digits) shape. Any
/// other digit count returns the original input flagged invalid; numbers
/// with other country codes land there by construction.
///
/// Blank input passes through untouched and valid.
pub fn normalize_phone_jp(value: &str) -> Canonicalized {
    if value.trim().is_empty() {
        return Canonicalized::unchanged(value);
    }
    let mut digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.starts_with("81") && digits.len() >= 10 {
        if digits.as_bytes()[2] != b'0' {
            // +81 drops the domestic leading zero; put it back
            digits = format!("0{}", &digits[2..]);
        } else {
            // malformed international form that kept the zero
            digits.remove(0);
        }
    }
    match digits.len() {
        10 => Canonicalized {
            value: format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
            invalid: false,
        },
        11 => Canonicalized {
            value: format!("{}-{}-{}", &digits[0..3], &digits[3..7], &digits[7..11]),
            invalid: false,
        },
        _ => Canonicalized::rejected(value),
    }
}
