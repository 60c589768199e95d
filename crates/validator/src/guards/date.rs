//! Date guard
//!
//! Dates travel through JSON as ISO-8601 strings. The guard accepts a bare
//! calendar date (`2024-03-01`) or an RFC 3339 timestamp, in which case the
//! date part in the timestamp's own offset is used.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::foundation::{CustomGuard, ErrorInfo, Rule, compose, create_guard};

/// Raised when a date guard receives something other than a string.
pub static DATE_TYPE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("date_type", "Expected a date"));

/// Raised when a date string cannot be parsed.
pub static INVALID_DATE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("invalid_date", "Invalid date"));

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

/// Accepts a parseable date string satisfying every rule.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use chrono::NaiveDate;
/// use serde_json::json;
///
/// let birthday = date(rules![max_date(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap())]);
///
/// assert!(birthday.validate(&json!("1990-05-17")).is_ok());
/// assert!(birthday.validate(&json!("2001-02-03T10:00:00+03:00")).is_ok());
/// assert_eq!(birthday.validate(&json!("17.05.1990")).unwrap_err().code(), INVALID_DATE_ERROR_INFO.code);
/// assert_eq!(birthday.validate(&json!("2015-01-01")).unwrap_err().code(), DATE_MAX_ERROR_INFO.code);
/// ```
pub fn date(rules: Vec<Box<dyn Rule<NaiveDate>>>) -> CustomGuard {
    let chain = compose(rules);
    create_guard(move |value, ctx, options| match value {
        Value::String(text) => match parse_date(text) {
            Some(day) => chain.check(&day, ctx),
            None => Err(ctx.create_error(&INVALID_DATE_ERROR_INFO)),
        },
        _ => Err(options.type_error(ctx, &DATE_TYPE_ERROR_INFO)),
    })
}
