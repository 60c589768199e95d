//! Guards: type gates with automatic required handling
//!
//! A [`Guard`] validates a [`Value`]. Guards built by [`create_guard`] run a
//! [`Required`] check followed by their executor, and honour optionality:
//! an optional guard accepts every value [`is_empty_value`] calls empty
//! without running the executor, and otherwise a failure whose code is
//! exactly [`REQUIRED_ERROR_INFO`]'s is discarded. Any other failure, including a
//! malformed value on an optional field, is returned unchanged.
//!
//! Optionality is handed to a guard as an explicit argument rather than
//! stored in the shared context, so it never reaches sibling or child
//! validations that run later with the same context.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::context::ValidationContext;
use crate::foundation::error::{ErrorInfo, ValidationError};
use crate::foundation::required::{REQUIRED_ERROR_INFO, Required, is_empty_value};
use crate::foundation::rule::{Rule, ValidationResult};

// ============================================================================
// GUARD TRAIT
// ============================================================================

/// A validator over [`Value`] that understands optionality.
///
/// Every guard is also a [`Rule<Value>`], so `validate`, `validate_in` and
/// composition with plain rules are available on all guards.
pub trait Guard: Send + Sync {
    /// Validates `value` inside `ctx`.
    ///
    /// `optional` is set by a wrapping combinator (for example
    /// [`optional`](crate::combinators::optional)) or by an object guard in
    /// partial mode. A guard combines it with its own configuration and does
    /// not forward it to child guards.
    fn guard(&self, value: &Value, ctx: &ValidationContext<'_>, optional: bool)
    -> ValidationResult;
}

impl<G: Guard + ?Sized> Rule<Value> for G {
    fn check(&self, value: &Value, ctx: &ValidationContext<'_>) -> ValidationResult {
        self.guard(value, ctx, false)
    }
}

impl<G: Guard + ?Sized> Guard for Arc<G> {
    fn guard(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
        optional: bool,
    ) -> ValidationResult {
        (**self).guard(value, ctx, optional)
    }
}

/// Convenience methods available on every guard.
pub trait GuardExt: Guard + Sized + 'static {
    /// Type-erases the guard so it can be stored in schemas and lists.
    fn shared(self) -> Arc<dyn Guard> {
        Arc::new(self)
    }
}

impl<G: Guard + Sized + 'static> GuardExt for G {}

/// Discards a required failure when the caller asked for optionality.
pub(crate) fn suppress_required(result: ValidationResult, optional: bool) -> ValidationResult {
    match result {
        Err(error) if optional && error.code() == REQUIRED_ERROR_INFO.code => {
            tracing::trace!(message = error.message(), "optional value is empty, skipping");
            Ok(())
        }
        other => other,
    }
}

// ============================================================================
// GUARD OPTIONS
// ============================================================================

/// Default settings of a guard, replaceable through [`CustomGuard::define`].
///
/// Options deserialize from camelCase JSON, so deployments can keep
/// localized messages in configuration:
///
/// ```
/// use formguard_validator::foundation::GuardOptions;
///
/// let options: GuardOptions = serde_json::from_str(
///     r#"{ "requiredErrorMessage": "Fill in this field" }"#,
/// ).unwrap();
/// assert_eq!(options.required_error_message.as_deref(), Some("Fill in this field"));
/// assert!(!options.is_optional());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuardOptions {
    /// Message reported instead of the default required message.
    pub required_error_message: Option<Cow<'static, str>>,
    /// Message reported instead of the default type mismatch message.
    pub type_error_message: Option<Cow<'static, str>>,
    /// Treats empty values as valid. Unset means `false`.
    #[serde(rename = "isOptional")]
    pub optional: Option<bool>,
}

impl GuardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn required_error_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.required_error_message = Some(message.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn type_error_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    pub fn is_optional(&self) -> bool {
        self.optional.unwrap_or(false)
    }

    /// Fields set in `overrides` win; unset ones keep the current value.
    pub fn merged_with(&self, overrides: &GuardOptions) -> GuardOptions {
        GuardOptions {
            required_error_message: overrides
                .required_error_message
                .clone()
                .or_else(|| self.required_error_message.clone()),
            type_error_message: overrides
                .type_error_message
                .clone()
                .or_else(|| self.type_error_message.clone()),
            optional: overrides.optional.or(self.optional),
        }
    }

    /// Builds the type mismatch error for `info`, honouring the override.
    pub fn type_error(&self, ctx: &ValidationContext<'_>, info: &ErrorInfo) -> ValidationError {
        ctx.create_error_with(info, self.type_error_message.clone())
    }
}

// ============================================================================
// GUARD FACTORY
// ============================================================================

type GuardExecutor =
    dyn Fn(&Value, &ValidationContext<'_>, &GuardOptions) -> ValidationResult + Send + Sync;

/// A guard built by [`create_guard`].
///
/// Value-like: [`define`](Self::define) returns a new guard and leaves this
/// one untouched. Derived guards share the executor, never the options.
#[derive(Clone)]
pub struct CustomGuard {
    executor: Arc<GuardExecutor>,
    options: GuardOptions,
    required: Required,
}

impl CustomGuard {
    fn from_parts(executor: Arc<GuardExecutor>, options: GuardOptions, required: Required) -> Self {
        let required = required.message(options.required_error_message.clone());
        Self {
            executor,
            options,
            required,
        }
    }

    /// Returns a new guard with `options` merged over the current ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use formguard_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let inn = string(rules![inn_ul()]);
    /// let custom = inn.define(GuardOptions::new().required_error_message("INN is required"));
    ///
    /// assert_eq!(custom.validate(&json!("")).unwrap_err().message(), "INN is required");
    /// assert_eq!(inn.validate(&json!("")).unwrap_err().message(), "Required");
    /// ```
    #[must_use = "define returns a new guard"]
    pub fn define(&self, options: GuardOptions) -> Self {
        Self::from_parts(
            Arc::clone(&self.executor),
            self.options.merged_with(&options),
            self.required.clone(),
        )
    }

    /// Shorthand for `define(GuardOptions::new().optional(true))`.
    #[must_use = "define returns a new guard"]
    pub fn into_optional(self) -> Self {
        self.define(GuardOptions::new().optional(true))
    }

    pub fn options(&self) -> &GuardOptions {
        &self.options
    }
}

impl Guard for CustomGuard {
    fn guard(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
        optional: bool,
    ) -> ValidationResult {
        let optional = optional || self.options.is_optional();
        if optional && is_empty_value(value) {
            tracing::trace!("optional value is empty, skipping");
            return Ok(());
        }
        let result = self
            .required
            .check(value, ctx)
            .and_then(|()| (self.executor)(value, ctx, &self.options));
        suppress_required(result, optional)
    }
}

impl fmt::Debug for CustomGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomGuard")
            .field("executor", &"<function>")
            .field("options", &self.options)
            .finish()
    }
}

/// Builds a guard from an executor.
///
/// The executor only runs for present values; it receives the effective
/// options so it can honour `type_error_message`.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::{json, Value};
/// use std::sync::LazyLock;
///
/// static NOT_BOOL: LazyLock<ErrorInfo> =
///     LazyLock::new(|| ErrorInfo::register("flag_type", "Expected a flag"));
///
/// let flag = create_guard(|value, ctx, options| match value {
///     Value::Bool(_) => Ok(()),
///     _ => Err(options.type_error(ctx, &NOT_BOOL)),
/// });
///
/// assert!(flag.validate(&json!(false)).is_ok());
/// assert_eq!(flag.validate(&json!("yes")).unwrap_err().code(), NOT_BOOL.code);
/// assert_eq!(flag.validate(&json!(null)).unwrap_err().code(), REQUIRED_ERROR_INFO.code);
/// ```
pub fn create_guard<F>(executor: F) -> CustomGuard
where
    F: Fn(&Value, &ValidationContext<'_>, &GuardOptions) -> ValidationResult
        + Send
        + Sync
        + 'static,
{
    create_guard_with(executor, Required::default())
}

/// Builds a guard whose presence check is `required` instead of the default.
///
/// The required message still comes from the guard options.
pub fn create_guard_with<F>(executor: F, required: Required) -> CustomGuard
where
    F: Fn(&Value, &ValidationContext<'_>, &GuardOptions) -> ValidationResult
        + Send
        + Sync
        + 'static,
{
    CustomGuard::from_parts(Arc::new(executor), GuardOptions::default(), required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::LazyLock;

    static TYPE_ERROR: LazyLock<ErrorInfo> =
        LazyLock::new(|| ErrorInfo::register("text_type", "Expected text"));
    static BAD_TEXT: LazyLock<ErrorInfo> =
        LazyLock::new(|| ErrorInfo::register("bad_text", "Bad text"));

    fn text() -> CustomGuard {
        create_guard(|value, ctx, options| match value {
            Value::String(s) if s == "bad" => Err(ctx.create_error(&BAD_TEXT)),
            Value::String(_) => Ok(()),
            _ => Err(options.type_error(ctx, &TYPE_ERROR)),
        })
    }

    #[test]
    fn required_runs_before_executor() {
        let error = text().validate(&json!("  ")).unwrap_err();
        assert_eq!(error.code(), REQUIRED_ERROR_INFO.code);
    }

    #[test]
    fn optional_suppresses_only_required() {
        let guard = text().into_optional();
        assert!(guard.validate(&json!(null)).is_ok());
        assert!(guard.validate(&json!("")).is_ok());
        assert_eq!(guard.validate(&json!("bad")).unwrap_err().code(), BAD_TEXT.code);
        assert_eq!(guard.validate(&json!(1)).unwrap_err().code(), TYPE_ERROR.code);
    }

    #[test]
    fn optional_accepts_empty_collections_despite_narrower_required() {
        let strict = create_guard_with(
            |_, ctx, _| Err(ctx.create_error(&BAD_TEXT)),
            Required::default().emptiness(crate::foundation::is_null_value),
        );

        assert_eq!(strict.validate(&json!({})).unwrap_err().code(), BAD_TEXT.code);
        let relaxed = strict.into_optional();
        assert!(relaxed.validate(&json!({})).is_ok());
        assert!(relaxed.validate(&json!([])).is_ok());
        assert!(relaxed.validate(&json!("  ")).is_ok());
        assert_eq!(relaxed.validate(&json!({ "a": 1 })).unwrap_err().code(), BAD_TEXT.code);
    }

    #[test]
    fn inherited_optional_applies_to_this_guard() {
        let value = json!(null);
        let ctx = ValidationContext::new(&value);
        assert!(text().guard(&value, &ctx, true).is_ok());
        assert!(text().guard(&value, &ctx, false).is_err());
    }

    #[test]
    fn define_does_not_mutate_original() {
        let original = text();
        let before = original.validate(&json!(null));

        let derived = original.define(
            GuardOptions::new()
                .required_error_message("Please fill in")
                .optional(true),
        );

        assert_eq!(original.validate(&json!(null)), before);
        assert_eq!(original.options(), &GuardOptions::default());
        assert!(derived.validate(&json!(null)).is_ok());
    }

    #[test]
    fn define_merges_over_previous_definition() {
        let first = text().define(GuardOptions::new().type_error_message("Not text"));
        let second = first.define(GuardOptions::new().required_error_message("Empty"));

        assert_eq!(second.validate(&json!(1)).unwrap_err().message(), "Not text");
        assert_eq!(second.validate(&json!(null)).unwrap_err().message(), "Empty");
        assert_eq!(first.validate(&json!(null)).unwrap_err().message(), "Required");
    }

    #[test]
    fn overridden_type_message_keeps_cause() {
        let guard = text().define(GuardOptions::new().type_error_message("Text please"));
        let error = guard.validate(&json!(5)).unwrap_err();

        assert_eq!(error.message(), "Text please");
        assert_eq!(error.cause().message, "Expected text");
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = GuardOptions::new().type_error_message("T").optional(true);
        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(encoded["isOptional"], json!(true));
        assert_eq!(encoded["typeErrorMessage"], json!("T"));
    }
}
