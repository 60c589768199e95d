//! TRANSFORM combinator - validate a derived value

use serde_json::Value;

use crate::foundation::{Guard, ValidationContext, ValidationResult};

/// Validates `f(value)` with the wrapped guard.
///
/// The input is never modified; the derived value only lives for the
/// duration of the check. The context root stays the original input.
pub struct Transform<F, G> {
    f: F,
    inner: G,
}

impl<F, G> Guard for Transform<F, G>
where
    F: Fn(&Value) -> Value + Send + Sync,
    G: Guard,
{
    fn guard(&self, value: &Value, ctx: &ValidationContext<'_>, optional: bool) -> ValidationResult {
        let derived = (self.f)(value);
        self.inner.guard(&derived, ctx, optional)
    }
}

/// Applies `f` before validating with `guard`.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::{json, Value};
///
/// // SNILS is often typed as "112-233-445 95"
/// let snils_field = transform(
///     |value: &Value| match value.as_str() {
///         Some(text) => json!(text.chars().filter(char::is_ascii_digit).collect::<String>()),
///         None => value.clone(),
///     },
///     string(rules![snils()]),
/// );
///
/// assert!(snils_field.validate(&json!("112-233-445 95")).is_ok());
/// ```
pub fn transform<F, G>(f: F, guard: G) -> Transform<F, G>
where
    F: Fn(&Value) -> Value + Send + Sync,
    G: Guard,
{
    Transform { f, inner: guard }
}
