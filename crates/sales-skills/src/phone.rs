//! E.164 phone number validation.

use once_cell::sync::Lazy;
use regex::Regex;

static E164: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").ok());

/// True when `number` is `+` followed by 2–15 digits with a non-zero lead digit.
pub fn is_valid_e164(number: &str) -> bool {
    E164.as_ref().is_some_and(|re| re.is_match(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_e164_numbers() {
        assert!(is_valid_e164("+14155552671"));
        assert!(is_valid_e164("+919987751517"));
        assert!(is_valid_e164("+12"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        let malformed = [
            "14155552671",
            "+04155552671",
            "+1",
            "+1415555267123456",
            "+1 415 555 2671",
            "",
            "+1415555267a",
        ];
        for bad in malformed {
            assert!(!is_valid_e164(bad), "{}", bad);
        }
    }
}
