use std::sync::LazyLock;

use regex::Regex;

// [0-9] rather than \d: the rule is ASCII digits only, while this crate's
// \d matches any Unicode decimal digit.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").expect("hardcoded pattern"));

/// Structural check of a mobile number: the literal prefix "09" followed by
/// exactly nine decimal digits, 11 characters in total. Not a telephony
/// lookup.
pub fn is_valid_phone(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    PHONE_PATTERN.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_phone() {
        assert!(is_valid_phone("09123456789"));
        assert!(is_valid_phone("09000000000"));
        assert!(is_valid_phone("09999999999"));
    }

    #[test]
    fn empty_is_invalid() {
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn wrong_length_is_invalid() {
        // one digit short
        assert!(!is_valid_phone("0912345678"));
        // one digit long
        assert!(!is_valid_phone("091234567890"));
        assert!(!is_valid_phone("09"));
        assert!(!is_valid_phone("0"));
    }

    #[test]
    fn wrong_prefix_is_invalid() {
        assert!(!is_valid_phone("08123456789"));
        assert!(!is_valid_phone("19123456789"));
        assert!(!is_valid_phone("99123456789"));
    }

    #[test]
    fn non_digits_are_invalid() {
        assert!(!is_valid_phone("0912a456789"));
        // Unicode digits do not count as decimal digits here
        assert!(!is_valid_phone("09۱۲۳۴۵۶۷۸۹"));
        assert!(!is_valid_phone("09 23456789"));
        assert!(!is_valid_phone("+9123456789"));
        assert!(!is_valid_phone("091234567x9"));
    }

    #[test]
    fn no_partial_match() {
        // the pattern must anchor both ends
        assert!(!is_valid_phone("a09123456789"));
        assert!(!is_valid_phone("09123456789b"));
        assert!(!is_valid_phone("0912345678909123456789"));
    }
}
