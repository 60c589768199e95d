//! Numeric validators
//!
//! Numbers reach these rules as `f64`; bounds are inclusive.

use std::sync::LazyLock;

use crate::foundation::{ErrorInfo, FnRule, create_rule};

pub static MIN_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("number_min", "Number is too small"));

pub static MAX_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("number_max", "Number is too large"));

pub static INTEGER_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("integer", "Must be a whole number"));

pub static POSITIVE_NUMBER_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("positive_number", "Must be greater than zero"));

/// Greater than or equal to `min`.
pub fn min(min: f64) -> FnRule<f64> {
    create_rule(move |value: &f64, ctx| {
        if *value < min {
            return Err(ctx.create_error_with(
                &MIN_ERROR_INFO,
                Some(format!("Must be at least {min}").into()),
            ));
        }
        Ok(())
    })
}

/// Less than or equal to `max`.
pub fn max(max: f64) -> FnRule<f64> {
    create_rule(move |value: &f64, ctx| {
        if *value > max {
            return Err(ctx.create_error_with(
                &MAX_ERROR_INFO,
                Some(format!("Must be at most {max}").into()),
            ));
        }
        Ok(())
    })
}

/// No fractional part.
pub fn integer() -> FnRule<f64> {
    create_rule(|value: &f64, ctx| {
        if value.fract() != 0.0 {
            return Err(ctx.create_error(&INTEGER_ERROR_INFO));
        }
        Ok(())
    })
}

/// Strictly greater than zero.
pub fn positive_number() -> FnRule<f64> {
    create_rule(|value: &f64, ctx| {
        if *value <= 0.0 {
            return Err(ctx.create_error(&POSITIVE_NUMBER_ERROR_INFO));
        }
        Ok(())
    })
}
