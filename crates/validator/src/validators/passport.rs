//! Russian internal passport fields
//!
//! Series, number and issuing division code are entered as separate
//! digit-only fields. Each rule reports three kinds of failure: non-digit
//! characters, wrong length, and a value no passport carries.

use std::sync::LazyLock;

use crate::foundation::{ErrorInfo, FnRule, ValidationContext, ValidationResult, create_rule};

const SERIES_LENGTH: usize = 4;
const NUMBER_LENGTH: usize = 6;
const CODE_LENGTH: usize = 6;

/// Numbers below this are never issued.
const NUMBER_MIN: u32 = 101;

pub static PASSPORT_SERIES_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("passport_series", "Invalid passport series"));

pub static PASSPORT_SERIES_LENGTH_ERROR_INFO: LazyLock<ErrorInfo> = LazyLock::new(|| {
    ErrorInfo::register("passport_series_length", "Passport series must have 4 digits")
});

pub static PASSPORT_SERIES_ONLY_DIGITS_ERROR_INFO: LazyLock<ErrorInfo> = LazyLock::new(|| {
    ErrorInfo::register("passport_series_only_digits", "Passport series may contain only digits")
});

pub static PASSPORT_NUMBER_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("passport_number", "Invalid passport number"));

pub static PASSPORT_NUMBER_LENGTH_ERROR_INFO: LazyLock<ErrorInfo> = LazyLock::new(|| {
    ErrorInfo::register("passport_number_length", "Passport number must have 6 digits")
});

pub static PASSPORT_NUMBER_ONLY_DIGITS_ERROR_INFO: LazyLock<ErrorInfo> = LazyLock::new(|| {
    ErrorInfo::register("passport_number_only_digits", "Passport number may contain only digits")
});

pub static PASSPORT_CODE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("passport_code", "Invalid division code"));

pub static PASSPORT_CODE_LENGTH_ERROR_INFO: LazyLock<ErrorInfo> = LazyLock::new(|| {
    ErrorInfo::register("passport_code_length", "Division code must have 6 digits")
});

pub static PASSPORT_CODE_ONLY_DIGITS_ERROR_INFO: LazyLock<ErrorInfo> = LazyLock::new(|| {
    ErrorInfo::register("passport_code_only_digits", "Division code may contain only digits")
});

/// Digits first, then length.
fn check_shape(
    value: &str,
    length: usize,
    only_digits: &ErrorInfo,
    wrong_length: &ErrorInfo,
    ctx: &ValidationContext<'_>,
) -> ValidationResult {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ctx.create_error(only_digits));
    }
    if value.len() != length {
        return Err(ctx.create_error(wrong_length));
    }
    Ok(())
}

/// The leading two digits are a region code; `00` is not assigned.
fn has_region(value: &str) -> bool {
    !value.starts_with("00")
}

// ============================================================================
// SERIES
// ============================================================================

/// Passport series: 4 digits, the first two a region code.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// assert!(passport_series().validate("4510").is_ok());
/// assert_eq!(
///     passport_series().validate("45 1").unwrap_err().code(),
///     PASSPORT_SERIES_ONLY_DIGITS_ERROR_INFO.code
/// );
/// ```
pub fn passport_series() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        check_shape(
            value,
            SERIES_LENGTH,
            &PASSPORT_SERIES_ONLY_DIGITS_ERROR_INFO,
            &PASSPORT_SERIES_LENGTH_ERROR_INFO,
            ctx,
        )?;
        if !has_region(value) {
            return Err(ctx.create_error(&PASSPORT_SERIES_ERROR_INFO));
        }
        Ok(())
    })
}

// ============================================================================
// NUMBER
// ============================================================================

/// Passport number: 6 digits, at least `000101`.
pub fn passport_number() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        check_shape(
            value,
            NUMBER_LENGTH,
            &PASSPORT_NUMBER_ONLY_DIGITS_ERROR_INFO,
            &PASSPORT_NUMBER_LENGTH_ERROR_INFO,
            ctx,
        )?;
        let issued = value.parse::<u32>().is_ok_and(|number| number >= NUMBER_MIN);
        if !issued {
            return Err(ctx.create_error(&PASSPORT_NUMBER_ERROR_INFO));
        }
        Ok(())
    })
}

// ============================================================================
// DIVISION CODE
// ============================================================================

/// Issuing division code: 6 digits without the dash, the first two a
/// region code.
pub fn passport_code() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        check_shape(
            value,
            CODE_LENGTH,
            &PASSPORT_CODE_ONLY_DIGITS_ERROR_INFO,
            &PASSPORT_CODE_LENGTH_ERROR_INFO,
            ctx,
        )?;
        if !has_region(value) {
            return Err(ctx.create_error(&PASSPORT_CODE_ERROR_INFO));
        }
        Ok(())
    })
}
