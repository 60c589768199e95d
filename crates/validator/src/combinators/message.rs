//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Rule, ValidationContext, ValidationResult};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a rule.
///
/// Useful for providing user-friendly or localized error messages. The
/// error's `cause` still carries the original code and message, so callers
/// branching on `cause().code` are unaffected.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// let rule = min_length(8).with_message("Password must be at least 8 characters");
///
/// let error = rule.validate("short").unwrap_err();
/// assert_eq!(error.message(), "Password must be at least 8 characters");
/// assert_eq!(error.code(), STRING_MIN_ERROR_INFO.code);
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: Cow<'static, str>,
}

impl<R> WithMessage<R> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: R, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<T, R> Rule<T> for WithMessage<R>
where
    T: ?Sized,
    R: Rule<T>,
{
    fn check(&self, value: &T, ctx: &ValidationContext<'_>) -> ValidationResult {
        self.inner
            .check(value, ctx)
            .map_err(|error| error.with_message(self.message.clone()))
    }
}

/// Free-function form of [`RuleExt::with_message`](crate::foundation::RuleExt::with_message).
pub fn with_message<R>(rule: R, message: impl Into<Cow<'static, str>>) -> WithMessage<R> {
    WithMessage::new(rule, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorInfo, create_rule};
    use crate::guards::{STRING_TYPE_ERROR_INFO, string};
    use serde_json::json;
    use std::sync::LazyLock;

    static TOO_SHORT: LazyLock<ErrorInfo> =
        LazyLock::new(|| ErrorInfo::register("too_short", "Too short"));

    fn short_rule() -> impl Rule<str> {
        create_rule(|value: &str, ctx| {
            if value.len() < 3 { Err(ctx.create_error(&TOO_SHORT)) } else { Ok(()) }
        })
    }

    #[test]
    fn test_with_message_replaces_message_only() {
        let rule = with_message(short_rule(), "Custom error");
        let error = rule.validate("ab").unwrap_err();

        assert_eq!(error.message(), "Custom error");
        assert_eq!(error.cause(), &*TOO_SHORT);
    }

    #[test]
    fn test_with_message_passes_through_success() {
        assert!(with_message(short_rule(), "Custom").validate("abcd").is_ok());
    }

    #[test]
    fn test_with_message_on_guard() {
        let rule = with_message(string(Vec::new()), "Text please");
        let error = rule.validate(&json!(1)).unwrap_err();
        assert_eq!(error.message(), "Text please");
        assert_eq!(error.code(), STRING_TYPE_ERROR_INFO.code);
    }
}
