//! Pattern validators

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorInfo, FnRule, create_rule};

pub static PATTERN_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("pattern", "Invalid format"));

pub static ONLY_NUMBER_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("only_number", "Only digits are allowed"));

pub static CONTAINS_NUMBERS_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("contains_numbers", "Must contain a digit"));

/// Matches `regex`. Anchor the expression to match the whole value.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use regex::Regex;
///
/// let postcode = pattern(Regex::new(r"^\d{6}$").unwrap());
/// assert!(postcode.validate("101000").is_ok());
/// assert_eq!(postcode.validate("10100").unwrap_err().code(), PATTERN_ERROR_INFO.code);
/// ```
pub fn pattern(regex: Regex) -> FnRule<str> {
    create_rule(move |value: &str, ctx| {
        if !regex.is_match(value) {
            return Err(ctx.create_error(&PATTERN_ERROR_INFO));
        }
        Ok(())
    })
}

/// Consists of ASCII digits only.
pub fn only_number() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ctx.create_error(&ONLY_NUMBER_ERROR_INFO));
        }
        Ok(())
    })
}

/// Contains at least one ASCII digit.
pub fn contains_numbers() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        if !value.bytes().any(|b| b.is_ascii_digit()) {
            return Err(ctx.create_error(&CONTAINS_NUMBERS_ERROR_INFO));
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;

    #[rstest]
    #[case("0123456789", true)]
    #[case("12a", false)]
    #[case("12 3", false)]
    #[case("١٢٣", false)]
    fn test_only_number(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(only_number().validate(value).is_ok(), valid);
    }

    #[rstest]
    #[case("abc1", true)]
    #[case("1", true)]
    #[case("abc", false)]
    #[case("", false)]
    fn test_contains_numbers(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(contains_numbers().validate(value).is_ok(), valid);
    }

    #[test]
    fn test_pattern_unanchored_matches_substring() {
        let rule = pattern(Regex::new(r"\d").unwrap());
        assert!(rule.validate("a1b").is_ok());
        assert!(rule.validate("ab").is_err());
    }
}
