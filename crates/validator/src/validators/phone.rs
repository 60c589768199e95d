//! Mobile phone validator
//!
//! Form inputs keep phones unmasked: the country code and the subscriber
//! number as one run of digits.

use std::sync::LazyLock;

use crate::foundation::{ErrorInfo, FnRule, create_rule};

pub static MOBILE_PHONE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("mobile_phone", "Invalid mobile phone number"));

const MOBILE_PHONE_LENGTH: usize = 11;

const MOBILE_PHONE_PREFIX: &str = "79";

// ============================================================================
// MOBILE PHONE
// ============================================================================

/// A Russian mobile number: 11 digits starting with `79`, no separators.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// assert!(mobile_phone().validate("79161234567").is_ok());
/// assert!(mobile_phone().validate("+7 916 123-45-67").is_err());
/// assert_eq!(
///     mobile_phone().validate("74951234567").unwrap_err().code(),
///     MOBILE_PHONE_ERROR_INFO.code
/// );
/// ```
pub fn mobile_phone() -> FnRule<str> {
    create_rule(|value: &str, ctx| {
        let valid = value.len() == MOBILE_PHONE_LENGTH
            && value.bytes().all(|b| b.is_ascii_digit())
            && value.starts_with(MOBILE_PHONE_PREFIX);
        if !valid {
            return Err(ctx.create_error(&MOBILE_PHONE_ERROR_INFO));
        }
        Ok(())
    })
}
