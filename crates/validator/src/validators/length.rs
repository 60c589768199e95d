//! Length validators
//!
//! String length is measured in Unicode scalar values (chars), so Cyrillic
//! input counts one per letter. Array length is the element count.

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{ErrorInfo, FnRule, create_rule};

// ============================================================================
// ERROR INFOS
// ============================================================================

pub static STRING_MIN_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("string_min", "Text is too short"));

pub static STRING_MAX_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("string_max", "Text is too long"));

pub static ARRAY_MIN_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("array_min", "Too few items"));

pub static ARRAY_MAX_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("array_max", "Too many items"));

// ============================================================================
// STRINGS
// ============================================================================

/// At least `min` characters.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// let rule = min_length(3);
/// assert!(rule.validate("Ёлка").is_ok());
/// assert_eq!(rule.validate("ab").unwrap_err().message(), "Must be at least 3 characters");
/// ```
pub fn min_length(min: usize) -> FnRule<str> {
    create_rule(move |value: &str, ctx| {
        if value.chars().count() < min {
            return Err(ctx.create_error_with(
                &STRING_MIN_ERROR_INFO,
                Some(format!("Must be at least {min} characters").into()),
            ));
        }
        Ok(())
    })
}

/// At most `max` characters.
pub fn max_length(max: usize) -> FnRule<str> {
    create_rule(move |value: &str, ctx| {
        if value.chars().count() > max {
            return Err(ctx.create_error_with(
                &STRING_MAX_ERROR_INFO,
                Some(format!("Must be at most {max} characters").into()),
            ));
        }
        Ok(())
    })
}

// ============================================================================
// ARRAYS
// ============================================================================

/// At least `min` elements.
pub fn min_items(min: usize) -> FnRule<[Value]> {
    create_rule(move |items: &[Value], ctx| {
        if items.len() < min {
            return Err(ctx.create_error_with(
                &ARRAY_MIN_ERROR_INFO,
                Some(format!("Must contain at least {min} items").into()),
            ));
        }
        Ok(())
    })
}

/// At most `max` elements.
pub fn max_items(max: usize) -> FnRule<[Value]> {
    create_rule(move |items: &[Value], ctx| {
        if items.len() > max {
            return Err(ctx.create_error_with(
                &ARRAY_MAX_ERROR_INFO,
                Some(format!("Must contain at most {max} items").into()),
            ));
        }
        Ok(())
    })
}
