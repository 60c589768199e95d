//! Object guard and schemas
//!
//! A [`Schema`] maps field names to guards. The [`object`] guard validates
//! each declared field of the input against its guard, threading the one
//! shared context through all of them, and reports every failing field.
//! Undeclared input fields are ignored.
//!
//! In partial mode (see [`deep_partial`](crate::combinators::deep_partial))
//! field guards are invoked as optional: missing fields pass, present fields
//! are still fully validated.

use std::fmt;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::foundation::{
    CustomGuard, ErrorInfo, Guard, GuardExt, Issues, Required, ValidationContext,
    ValidationResult, create_guard_with, is_null_value,
};

/// Raised when an object guard receives a non-object value.
pub static OBJECT_TYPE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("object_type", "Expected an object"));

/// Aggregate error of an object with failing fields.
pub static OBJECT_FIELDS_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("object_fields", "Some fields are invalid"));

static NULL: Value = Value::Null;

/// Field guards of an object, in declaration order.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// let schema = Schema::new()
///     .field("inn", string(rules![inn_ul()]))
///     .field("kpp", optional(string(rules![kpp()])))
///     .nested("director", Schema::new().field("name", string(rules![person_name()])));
///
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, Arc<dyn Guard>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`, replacing an earlier declaration of the same field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<G>(mut self, name: impl Into<String>, guard: G) -> Self
    where
        G: Guard + 'static,
    {
        self.fields.insert(name.into(), guard.shared());
        self
    }

    /// Declares `name` as a nested object validated by `schema`.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested(self, name: impl Into<String>, schema: Schema) -> Self {
        self.field(name, object(schema))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn check_fields(&self, input: &Map<String, Value>, ctx: &ValidationContext<'_>) -> ValidationResult {
        let optional = ctx.is_partial();
        let mut issues = IndexMap::new();
        for (name, guard) in &self.fields {
            let value = input.get(name).unwrap_or(&NULL);
            if let Err(error) = guard.guard(value, ctx, optional) {
                issues.insert(name.clone(), error);
            }
        }

        if issues.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            failed = issues.len(),
            declared = self.fields.len(),
            partial = optional,
            "object fields failed validation"
        );
        Err(ctx.create_aggregate_error(&OBJECT_FIELDS_ERROR_INFO, Issues::Fields(issues)))
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Validates an object against `schema`.
///
/// Only `null` or a missing value fails the object's own required check;
/// `{}` is passed on to the field guards so each missing field is reported.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::json;
///
/// let company = object(
///     Schema::new()
///         .field("inn", string(rules![inn_ul()]))
///         .field("kpp", optional(string(rules![kpp()]))),
/// );
///
/// assert!(company.validate(&json!({ "inn": "7728168971" })).is_ok());
///
/// let error = company.validate(&json!({})).unwrap_err();
/// assert_eq!(error.field("inn").unwrap().code(), REQUIRED_ERROR_INFO.code);
/// assert!(error.field("kpp").is_none());
/// ```
pub fn object(schema: Schema) -> CustomGuard {
    create_guard_with(
        move |value, ctx, options| match value {
            Value::Object(input) => schema.check_fields(input, ctx),
            _ => Err(options.type_error(ctx, &OBJECT_TYPE_ERROR_INFO)),
        },
        Required::default().emptiness(is_null_value),
    )
}
