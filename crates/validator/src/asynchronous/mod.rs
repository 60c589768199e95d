//! Async guards for rules that perform I/O
//!
//! Some checks need an outside answer: is this login taken, does this INN
//! belong to a registered company. Those are [`AsyncRule`]s. They plug into
//! [`string_async`], which runs the ordinary synchronous chain first and
//! only then awaits its async rules in order.
//!
//! [`object_async`] starts the check of every field at once and waits for
//! all of them with [`join_all`]; the merged result uses the same
//! collect-all policy as [`object`](crate::guards::object). Field checks are
//! never cancelled and there is no built-in timeout.
//!
//! Every synchronous [`Guard`] is also an [`AsyncGuard`], so sync and async
//! fields mix freely in one [`AsyncSchema`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{
    CustomGuard, Guard, GuardOptions, Issues, Overrides, Required, Rule, ValidationContext,
    ValidationError, ValidationResult, compose, create_guard, create_guard_with, is_empty_value,
    is_null_value,
};
use crate::guards::{OBJECT_FIELDS_ERROR_INFO, OBJECT_TYPE_ERROR_INFO, STRING_TYPE_ERROR_INFO};

static NULL: Value = Value::Null;

// ============================================================================
// TRAITS
// ============================================================================

/// A rule whose check is asynchronous.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use formguard_validator::asynchronous::AsyncRule;
/// use std::sync::LazyLock;
///
/// static TAKEN: LazyLock<ErrorInfo> =
///     LazyLock::new(|| ErrorInfo::register("login_taken", "Login is taken"));
///
/// struct FreeLogin;
///
/// #[async_trait::async_trait]
/// impl AsyncRule<str> for FreeLogin {
///     async fn check_async(&self, value: &str, ctx: &ValidationContext<'_>) -> ValidationResult {
///         // a directory lookup would go here
///         if value == "admin" {
///             return Err(ctx.create_error(&TAKEN));
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait AsyncRule<T: ?Sized + Sync>: Send + Sync {
    async fn check_async(&self, value: &T, ctx: &ValidationContext<'_>) -> ValidationResult;
}

/// A guard whose check is asynchronous.
#[async_trait]
pub trait AsyncGuard: Send + Sync {
    /// Validates `value` inside `ctx`; `optional` has the same meaning as
    /// in [`Guard::guard`].
    async fn guard_async(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
        optional: bool,
    ) -> ValidationResult;

    /// Top-level entry point: creates the context and awaits the check.
    async fn validate_async(&self, value: &Value) -> ValidationResult {
        let ctx = ValidationContext::new(value);
        self.guard_async(value, &ctx, false).await
    }
}

#[async_trait]
impl<G: Guard + ?Sized> AsyncGuard for G {
    async fn guard_async(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
        optional: bool,
    ) -> ValidationResult {
        self.guard(value, ctx, optional)
    }
}

// ============================================================================
// STRING
// ============================================================================

/// String guard with trailing async rules, built by [`string_async`].
#[derive(Clone)]
pub struct StringAsync {
    sync: CustomGuard,
    async_rules: Arc<Vec<Box<dyn AsyncRule<str>>>>,
}

impl StringAsync {
    /// Returns a new guard with `options` merged over the current ones.
    #[must_use = "define returns a new guard"]
    pub fn define(&self, options: GuardOptions) -> Self {
        Self {
            sync: self.sync.define(options),
            async_rules: Arc::clone(&self.async_rules),
        }
    }
}

#[async_trait]
impl AsyncGuard for StringAsync {
    async fn guard_async(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
        optional: bool,
    ) -> ValidationResult {
        self.sync.guard(value, ctx, optional)?;
        let Some(text) = value.as_str() else {
            return Ok(());
        };
        if is_empty_value(value) {
            return Ok(());
        }
        for rule in self.async_rules.iter() {
            rule.check_async(text, ctx).await?;
        }
        Ok(())
    }
}

impl fmt::Debug for StringAsync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringAsync")
            .field("sync", &self.sync)
            .field("async_rules", &self.async_rules.len())
            .finish()
    }
}

/// Like [`string`](crate::guards::string), followed by `async_rules`.
///
/// Async rules only run when every sync rule passed, one after another,
/// stopping at the first error.
pub fn string_async(
    rules: Vec<Box<dyn Rule<str>>>,
    async_rules: Vec<Box<dyn AsyncRule<str>>>,
) -> StringAsync {
    let chain = compose(rules);
    let sync = create_guard(move |value, ctx, options| match value {
        Value::String(text) => chain.check(text, ctx),
        _ => Err(options.type_error(ctx, &STRING_TYPE_ERROR_INFO)),
    });
    StringAsync {
        sync,
        async_rules: Arc::new(async_rules),
    }
}

// ============================================================================
// OBJECT
// ============================================================================

/// Field guards of an async object, in declaration order.
#[derive(Clone, Default)]
pub struct AsyncSchema {
    fields: IndexMap<String, Arc<dyn AsyncGuard>>,
}

impl AsyncSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`; sync guards are accepted as well.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<G>(mut self, name: impl Into<String>, guard: G) -> Self
    where
        G: AsyncGuard + 'static,
    {
        self.fields.insert(name.into(), Arc::new(guard));
        self
    }

    /// Declares `name` as a nested async object.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested(self, name: impl Into<String>, schema: AsyncSchema) -> Self {
        self.field(name, object_async(schema))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for AsyncSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncSchema")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Object guard over an [`AsyncSchema`], built by [`object_async`].
#[derive(Clone, Debug)]
pub struct ObjectAsync {
    shape: CustomGuard,
    schema: AsyncSchema,
}

impl ObjectAsync {
    /// Returns a new guard with `options` merged over the current ones.
    #[must_use = "define returns a new guard"]
    pub fn define(&self, options: GuardOptions) -> Self {
        Self {
            shape: self.shape.define(options),
            schema: self.schema.clone(),
        }
    }

    /// Validates `value` in partial mode: absent fields pass at any depth.
    pub async fn validate_partial(&self, value: &Value) -> ValidationResult {
        let ctx = ValidationContext::with_overrides(
            value,
            Overrides {
                object_is_partial: true,
            },
        );
        tracing::trace!("entering partial mode");
        self.guard_async(value, &ctx, true).await
    }
}

#[async_trait]
impl AsyncGuard for ObjectAsync {
    async fn guard_async(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
        optional: bool,
    ) -> ValidationResult {
        self.shape.guard(value, ctx, optional)?;
        if (optional || self.shape.options().is_optional()) && is_empty_value(value) {
            return Ok(());
        }
        let Value::Object(input) = value else {
            return Ok(());
        };

        let field_optional = ctx.is_partial();
        let checks = self.schema.fields.iter().map(|(name, guard)| async move {
            let field = input.get(name).unwrap_or(&NULL);
            (name, guard.guard_async(field, ctx, field_optional).await)
        });
        let issues: IndexMap<String, ValidationError> = join_all(checks)
            .await
            .into_iter()
            .filter_map(|(name, result)| result.err().map(|error| (name.clone(), error)))
            .collect();

        if issues.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            failed = issues.len(),
            declared = self.schema.len(),
            partial = field_optional,
            "async object fields failed validation"
        );
        Err(ctx.create_aggregate_error(&OBJECT_FIELDS_ERROR_INFO, Issues::Fields(issues)))
    }
}

/// Async counterpart of [`object`](crate::guards::object).
pub fn object_async(schema: AsyncSchema) -> ObjectAsync {
    let shape = create_guard_with(
        |value, ctx, options| match value {
            Value::Object(_) => Ok(()),
            _ => Err(options.type_error(ctx, &OBJECT_TYPE_ERROR_INFO)),
        },
        Required::default().emptiness(is_null_value),
    );
    ObjectAsync { shape, schema }
}
