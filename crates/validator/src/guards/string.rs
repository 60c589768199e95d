//! String guard

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{CustomGuard, ErrorInfo, Rule, compose, create_guard};

/// Raised when a string guard receives a non-string value.
pub static STRING_TYPE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("string_type", "Expected a string"));

/// Accepts a non-blank string satisfying every rule, in order.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::json;
///
/// let kpp_field = string(rules![kpp()]);
///
/// assert!(kpp_field.validate(&json!("773301001")).is_ok());
/// assert_eq!(kpp_field.validate(&json!(773301001)).unwrap_err().code(), STRING_TYPE_ERROR_INFO.code);
/// assert_eq!(kpp_field.validate(&json!(" ")).unwrap_err().code(), REQUIRED_ERROR_INFO.code);
/// ```
pub fn string(rules: Vec<Box<dyn Rule<str>>>) -> CustomGuard {
    let chain = compose(rules);
    create_guard(move |value, ctx, options| match value {
        Value::String(text) => chain.check(text, ctx),
        _ => Err(options.type_error(ctx, &STRING_TYPE_ERROR_INFO)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{GuardOptions, REQUIRED_ERROR_INFO};
    use crate::rules;
    use crate::validators::{STRING_MAX_ERROR_INFO, max_length};
    use serde_json::json;

    #[test]
    fn rules_run_after_type_check() {
        let guard = string(rules![max_length(3)]);
        assert!(guard.validate(&json!("abc")).is_ok());
        assert_eq!(guard.validate(&json!("abcd")).unwrap_err().code(), STRING_MAX_ERROR_INFO.code);
    }

    #[test]
    fn non_strings_are_type_errors() {
        let guard = string(Vec::new());
        for value in [json!(1), json!(true), json!(["a"]), json!({ "a": 1 })] {
            assert_eq!(guard.validate(&value).unwrap_err().code(), STRING_TYPE_ERROR_INFO.code);
        }
    }

    #[test]
    fn type_message_can_be_redefined() {
        let guard = string(Vec::new()).define(GuardOptions::new().type_error_message("Text only"));
        let error = guard.validate(&json!(1)).unwrap_err();
        assert_eq!(error.message(), "Text only");
        assert_eq!(error.cause().message, STRING_TYPE_ERROR_INFO.message);
    }

    #[test]
    fn optional_string_accepts_blank() {
        let guard = string(rules![max_length(3)]).into_optional();
        assert!(guard.validate(&json!("   ")).is_ok());
        assert!(guard.validate(&json!(null)).is_ok());
        assert!(guard.validate(&json!("toolong")).is_err());
        assert_ne!(
            guard.validate(&json!("toolong")).unwrap_err().code(),
            REQUIRED_ERROR_INFO.code
        );
    }
}
