//! Per-call validation context
//!
//! One [`ValidationContext`] exists per top-level validation call. It is
//! created lazily by the first rule or guard that runs without one and is
//! then passed by reference, unchanged, to every nested rule and guard.
//!
//! The value currently being checked is never part of the context: it
//! travels as the first argument of each rule. The context only holds the
//! top-level `root` (for cross-field checks) and the global [`Overrides`].

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::error::{ErrorInfo, Issues, ValidationError};

/// Global switches for one validation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Overrides {
    /// When set, object guards treat every field as optional.
    pub object_is_partial: bool,
}

/// Shared state of one validation call.
///
/// # Examples
///
/// ```
/// use formguard_validator::foundation::ValidationContext;
/// use serde_json::json;
///
/// let input = json!({ "password": "secret" });
/// let ctx = ValidationContext::new(&input);
/// assert_eq!(ctx.root_field("password"), Some(&json!("secret")));
/// assert!(!ctx.is_partial());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    root: &'a Value,
    overrides: Overrides,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context rooted at `root` with default overrides.
    pub fn new(root: &'a Value) -> Self {
        Self::with_overrides(root, Overrides::default())
    }

    /// Creates a context rooted at `root` with explicit overrides.
    pub fn with_overrides(root: &'a Value, overrides: Overrides) -> Self {
        Self { root, overrides }
    }

    /// The top-level value submitted for validation.
    pub fn root(&self) -> &'a Value {
        self.root
    }

    /// Looks up a top-level field of the root object.
    pub fn root_field(&self, name: &str) -> Option<&'a Value> {
        self.root.get(name)
    }

    /// Call-wide switches, such as partial mode.
    ///
    /// ```
    /// use formguard_validator::foundation::{Overrides, ValidationContext};
    /// use serde_json::json;
    ///
    /// let input = json!({});
    /// assert_eq!(ValidationContext::new(&input).overrides(), Overrides::default());
    /// ```
    pub fn overrides(&self) -> Overrides {
        self.overrides
    }

    /// Whether partial mode is active for this call.
    pub fn is_partial(&self) -> bool {
        self.overrides.object_is_partial
    }

    /// A context over the same root with partial mode switched on.
    ///
    /// The derived instance is handed to one subtree only. Rules outside
    /// that subtree keep observing `self`, so the flag is never toggled on an
    /// instance other validations already hold. Inside the subtree every
    /// rule observes the derived instance.
    pub(crate) fn to_partial(&self) -> Self {
        Self {
            root: self.root,
            overrides: Overrides {
                object_is_partial: true,
            },
        }
    }

    /// Builds an error for `info` with its default message.
    pub fn create_error(&self, info: &ErrorInfo) -> ValidationError {
        ValidationError::new(info)
    }

    /// Builds an error for `info`, overriding the message when one is given.
    pub fn create_error_with(
        &self,
        info: &ErrorInfo,
        message: Option<Cow<'static, str>>,
    ) -> ValidationError {
        ValidationError::with_override(info, message)
    }

    /// Builds an aggregate error for object or array children.
    pub fn create_aggregate_error(&self, info: &ErrorInfo, issues: Issues) -> ValidationError {
        ValidationError::aggregate(info, issues)
    }
}

/// Returns `prev` when present, otherwise a fresh context rooted at `value`.
///
/// A borrowed result is the very instance that was passed in, so nested
/// calls observe the same context by identity.
pub fn create_context<'c, 'a>(
    prev: Option<&'c ValidationContext<'a>>,
    value: &'a Value,
) -> Cow<'c, ValidationContext<'a>> {
    match prev {
        Some(ctx) => Cow::Borrowed(ctx),
        None => Cow::Owned(ValidationContext::new(value)),
    }
}

// ============================================================================
// ROOT CONVERSION
// ============================================================================

/// Converts a standalone rule input into a context root.
///
/// Guards already receive a [`Value`] and borrow it. Typed leaf rules that
/// are invoked without a context (`inn_ul().validate("7728168971")`) convert
/// their input once so the fresh context has a root.
pub trait ToRoot {
    fn to_root(&self) -> Cow<'_, Value>;
}

impl ToRoot for Value {
    fn to_root(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl ToRoot for str {
    fn to_root(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::String(self.to_owned()))
    }
}

impl ToRoot for String {
    fn to_root(&self) -> Cow<'_, Value> {
        self.as_str().to_root()
    }
}

impl ToRoot for f64 {
    fn to_root(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::from(*self))
    }
}

impl ToRoot for i64 {
    fn to_root(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::from(*self))
    }
}

impl ToRoot for bool {
    fn to_root(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Bool(*self))
    }
}

impl ToRoot for [Value] {
    fn to_root(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Array(self.to_vec()))
    }
}

impl ToRoot for Map<String, Value> {
    fn to_root(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Object(self.clone()))
    }
}

impl ToRoot for NaiveDate {
    fn to_root(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::String(self.to_string()))
    }
}
