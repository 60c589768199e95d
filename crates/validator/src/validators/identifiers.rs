//! Russian business and personal identifiers
//!
//! | Rule        | Identifier                            | Digits | Check                  |
//! |-------------|---------------------------------------|--------|------------------------|
//! | [`inn_ul`]  | taxpayer number of an organisation    | 10     | weighted sum mod 11    |
//! | [`inn_ip`]  | taxpayer number of an individual      | 12     | two weighted sums      |
//! | [`kpp`]     | tax registration reason code          | 9      | format                 |
//! | [`snils`]   | personal insurance account number     | 11     | weighted sum mod 101   |
//! | [`ogrn_ul`] | state registration number, company   | 13     | prefix mod 11          |
//! | [`ogrn_ip`] | state registration number, individual | 15     | prefix mod 13          |
//!
//! A value made only of zeros is never valid, even where its checksum
//! would match.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorInfo, FnRule, create_rule};

pub static INN_UL_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("inn_ul", "Invalid organisation INN"));

pub static INN_IP_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("inn_ip", "Invalid individual INN"));

pub static INVALID_KPP_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("kpp", "Invalid KPP"));

pub static KPP_ZEROS_ONLY_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("kpp_zeros_only", "KPP cannot consist of zeros only"));

pub static KPP_DOUBLE_ZERO_START_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("kpp_double_zero_start", "KPP cannot start with 00"));

pub static SNILS_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("snils", "Invalid SNILS"));

pub static OGRN_UL_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("ogrn_ul", "Invalid organisation OGRN"));

pub static OGRN_IP_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("ogrn_ip", "Invalid individual OGRN"));

static KPP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}[\dA-Z]{2}\d{3}$").unwrap());

const INN_UL_WEIGHTS: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];
const INN_IP_WEIGHTS_11: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];
const INN_IP_WEIGHTS_12: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

// ============================================================================
// HELPERS
// ============================================================================

/// Digits of `value` when it is exactly `len` ASCII digits, not all zero.
fn digits(value: &str, len: usize) -> Option<Vec<u32>> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if value.bytes().all(|b| b == b'0') {
        return None;
    }
    Some(value.bytes().map(|b| u32::from(b - b'0')).collect())
}

fn weighted_check(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    sum % 11 % 10
}

fn snils_checksum(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(9)
        .zip((1..=9).rev())
        .map(|(d, w)| d * w)
        .sum();
    match sum {
        0..100 => sum,
        100 | 101 => 0,
        _ => match sum % 101 {
            100 => 0,
            rest => rest,
        },
    }
}

fn ogrn_check(value: &str, len: usize, modulus: u64) -> bool {
    let Some(digits) = digits(value, len) else {
        return false;
    };
    let Ok(prefix) = value[..len - 1].parse::<u64>() else {
        return false;
    };
    u64::from(digits[len - 1]) == prefix % modulus % 10
}

// ============================================================================
// INN
// ============================================================================

/// Taxpayer number of an organisation: 10 digits, last one a check digit.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// assert!(inn_ul().validate("7728168971").is_ok());
/// assert_eq!(inn_ul().validate("7728168911").unwrap_err().code(), INN_UL_ERROR_INFO.code);
/// ```
pub fn inn_ul() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        let valid = digits(value, 10)
            .is_some_and(|d| weighted_check(&d[..9], &INN_UL_WEIGHTS) == d[9]);
        if !valid {
            return Err(ctx.create_error(&INN_UL_ERROR_INFO));
        }
        Ok(())
    })
}

/// Taxpayer number of an individual: 12 digits, last two are check digits.
pub fn inn_ip() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        let valid = digits(value, 12).is_some_and(|d| {
            weighted_check(&d[..10], &INN_IP_WEIGHTS_11) == d[10]
                && weighted_check(&d[..11], &INN_IP_WEIGHTS_12) == d[11]
        });
        if !valid {
            return Err(ctx.create_error(&INN_IP_ERROR_INFO));
        }
        Ok(())
    })
}

// ============================================================================
// KPP
// ============================================================================

/// Tax registration reason code: 4 digits, 2 digits or capital Latin
/// letters, 3 digits.
///
/// Reports [`KPP_ZEROS_ONLY_ERROR_INFO`] and
/// [`KPP_DOUBLE_ZERO_START_ERROR_INFO`] for the two common mistakes and
/// [`INVALID_KPP_ERROR_INFO`] for everything else.
pub fn kpp() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        if !value.is_empty() && value.bytes().all(|b| b == b'0') {
            return Err(ctx.create_error(&KPP_ZEROS_ONLY_ERROR_INFO));
        }
        if value.starts_with("00") {
            return Err(ctx.create_error(&KPP_DOUBLE_ZERO_START_ERROR_INFO));
        }
        if !KPP_REGEX.is_match(value) {
            return Err(ctx.create_error(&INVALID_KPP_ERROR_INFO));
        }
        Ok(())
    })
}

// ============================================================================
// SNILS
// ============================================================================

/// Personal insurance account number: 9 digits and a 2-digit checksum,
/// without separators.
pub fn snils() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        let valid = digits(value, 11)
            .is_some_and(|d| snils_checksum(&d) == d[9] * 10 + d[10]);
        if !valid {
            return Err(ctx.create_error(&SNILS_ERROR_INFO));
        }
        Ok(())
    })
}

// ============================================================================
// OGRN
// ============================================================================

/// State registration number of a company: 13 digits.
pub fn ogrn_ul() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        if !ogrn_check(value, 13, 11) {
            return Err(ctx.create_error(&OGRN_UL_ERROR_INFO));
        }
        Ok(())
    })
}

/// State registration number of an individual entrepreneur: 15 digits.
pub fn ogrn_ip() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        if !ogrn_check(value, 15, 13) {
            return Err(ctx.create_error(&OGRN_IP_ERROR_INFO));
        }
        Ok(())
    })
}
