//! The built-in presence check
//!
//! Every guard runs exactly one [`Required`] check before its own logic.
//! Emptiness is decided by [`is_empty_value`]: `null`, blank strings
//! (whitespace only), empty arrays and empty objects are empty; booleans and
//! numbers, including `false` and `0`, are always present.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::context::ValidationContext;
use crate::foundation::error::ErrorInfo;
use crate::foundation::rule::{Rule, ValidationResult};

/// Raised when a value is absent or empty.
pub static REQUIRED_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("required", "Required"));

/// Whether `value` counts as absent.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Whether `value` is absent, treating every object as present.
///
/// Object guards use this test so that `{}` reaches the field guards and
/// reports which fields are missing.
pub fn is_null_value(value: &Value) -> bool {
    value.is_null()
}

/// Fails with [`REQUIRED_ERROR_INFO`] when the value is empty.
#[derive(Debug, Clone)]
pub struct Required {
    message: Option<Cow<'static, str>>,
    is_empty: fn(&Value) -> bool,
}

impl Default for Required {
    fn default() -> Self {
        Self {
            message: None,
            is_empty: is_empty_value,
        }
    }
}

impl Required {
    /// A presence check reporting `message` instead of the default text.
    pub fn with_message(message: Option<Cow<'static, str>>) -> Self {
        Self::default().message(message)
    }

    /// Replaces the reported message; `None` restores the default.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: Option<Cow<'static, str>>) -> Self {
        self.message = message;
        self
    }

    /// Replaces the emptiness test, [`is_empty_value`] by default.
    #[must_use = "builder methods must be chained or built"]
    pub fn emptiness(mut self, is_empty: fn(&Value) -> bool) -> Self {
        self.is_empty = is_empty;
        self
    }
}

impl Rule<Value> for Required {
    fn check(&self, value: &Value, ctx: &ValidationContext<'_>) -> ValidationResult {
        if (self.is_empty)(value) {
            return Err(ctx.create_error_with(&REQUIRED_ERROR_INFO, self.message.clone()));
        }
        Ok(())
    }
}

/// Creates a presence check with the default message.
///
/// # Examples
///
/// ```
/// use formguard_validator::foundation::{required, Rule, REQUIRED_ERROR_INFO};
/// use serde_json::json;
///
/// assert_eq!(required().validate(&json!(null)).unwrap_err().code(), REQUIRED_ERROR_INFO.code);
/// assert_eq!(required().validate(&json!("   ")).unwrap_err().code(), REQUIRED_ERROR_INFO.code);
/// assert!(required().validate(&json!(0)).is_ok());
/// ```
pub fn required() -> Required {
    Required::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("a"))]
    #[case(json!(0))]
    #[case(json!(1))]
    #[case(json!(true))]
    #[case(json!(false))]
    #[case(json!(["v"]))]
    #[case(json!([null]))]
    #[case(json!({ "a": 1 }))]
    fn present_values_pass(#[case] value: Value) {
        assert!(required().validate(&value).is_ok());
    }

    #[rstest]
    #[case(json!(""))]
    #[case(json!("     "))]
    #[case(json!("\t\n"))]
    #[case(json!([]))]
    #[case(json!({}))]
    #[case(json!(null))]
    fn empty_values_fail(#[case] value: Value) {
        let error = required().validate(&value).unwrap_err();
        assert_eq!(error.code(), REQUIRED_ERROR_INFO.code);
    }

    #[test]
    fn custom_message_replaces_default() {
        let error = Required::with_message(Some("custom message".into()))
            .validate(&Value::Null)
            .unwrap_err();

        assert_eq!(error.message(), "custom message");
        assert_eq!(error.cause().message, REQUIRED_ERROR_INFO.message);
    }

    #[test]
    fn null_only_emptiness_accepts_empty_object() {
        let rule = required().emptiness(is_null_value);
        assert!(rule.validate(&json!({})).is_ok());
        assert!(rule.validate(&json!("")).is_ok());
        assert!(rule.validate(&Value::Null).is_err());
    }
}
