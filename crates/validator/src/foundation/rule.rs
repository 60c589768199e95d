//! Rules: pure, composable validation predicates
//!
//! A [`Rule`] checks one value against one shared [`ValidationContext`] and
//! returns `Ok(())` or the first [`ValidationError`] it finds. Rules never
//! mutate their input or the context.
//!
//! Leaf rules are built with [`create_rule`], which adds the common
//! `exclude` bypass so individual rules never reimplement it.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::combinators::message::WithMessage;
use crate::foundation::context::{ToRoot, ValidationContext};
use crate::foundation::error::ValidationError;

/// Outcome of a validation: `Ok(())` when the value is valid.
pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A validation predicate over values of type `T`.
///
/// # Examples
///
/// ```
/// use formguard_validator::foundation::{
///     ErrorInfo, Rule, ValidationContext, ValidationResult,
/// };
/// use std::sync::LazyLock;
///
/// static NOT_ADMIN: LazyLock<ErrorInfo> =
///     LazyLock::new(|| ErrorInfo::register("not_admin", "Reserved name"));
///
/// struct NotAdmin;
///
/// impl Rule<str> for NotAdmin {
///     fn check(&self, value: &str, ctx: &ValidationContext<'_>) -> ValidationResult {
///         if value == "admin" {
///             return Err(ctx.create_error(&NOT_ADMIN));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(NotAdmin.validate("alice").is_ok());
/// assert_eq!(NotAdmin.validate("admin").unwrap_err().code(), NOT_ADMIN.code);
/// ```
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Checks `value` within an existing context.
    fn check(&self, value: &T, ctx: &ValidationContext<'_>) -> ValidationResult;

    /// Checks `value` as a top-level call, creating its context.
    fn validate(&self, value: &T) -> ValidationResult
    where
        T: ToRoot,
    {
        self.validate_in(value, None)
    }

    /// Checks `value`, reusing `ctx` when given and creating one otherwise.
    fn validate_in(&self, value: &T, ctx: Option<&ValidationContext<'_>>) -> ValidationResult
    where
        T: ToRoot,
    {
        match ctx {
            Some(ctx) => self.check(value, ctx),
            None => {
                let root = value.to_root();
                self.check(value, &ValidationContext::new(&root))
            }
        }
    }
}

// ============================================================================
// RULE FACTORY
// ============================================================================

type Executor<T> = dyn Fn(&T, &ValidationContext<'_>) -> ValidationResult + Send + Sync;
type ExcludeFn<T> = dyn Fn(&T, &ValidationContext<'_>) -> bool + Send + Sync;

/// Parameters every rule built by [`create_rule`] understands.
pub struct CommonRuleParams<T: ?Sized> {
    exclude: Option<Arc<ExcludeFn<T>>>,
}

impl<T: ?Sized> CommonRuleParams<T> {
    pub fn new() -> Self {
        Self { exclude: None }
    }

    /// Treats values matching `predicate` as valid without running the rule.
    pub fn exclude<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &ValidationContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.exclude = Some(Arc::new(predicate));
        self
    }

    fn is_excluded(&self, value: &T, ctx: &ValidationContext<'_>) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|exclude| exclude(value, ctx))
    }
}

impl<T: ?Sized> Default for CommonRuleParams<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for CommonRuleParams<T> {
    fn clone(&self) -> Self {
        Self {
            exclude: self.exclude.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for CommonRuleParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommonRuleParams")
            .field("exclude", &self.exclude.as_ref().map(|_| "<function>"))
            .finish()
    }
}

/// A rule built from a closure by [`create_rule`].
pub struct FnRule<T: ?Sized> {
    executor: Box<Executor<T>>,
    params: CommonRuleParams<T>,
}

impl<T: ?Sized> FnRule<T> {
    /// Adds an exclusion predicate, replacing any previous one.
    pub fn exclude<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &ValidationContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.params = self.params.exclude(predicate);
        self
    }
}

impl<T: ?Sized> Rule<T> for FnRule<T> {
    fn check(&self, value: &T, ctx: &ValidationContext<'_>) -> ValidationResult {
        if self.params.is_excluded(value, ctx) {
            return Ok(());
        }
        (self.executor)(value, ctx)
    }
}

impl<T: ?Sized> fmt::Debug for FnRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("executor", &"<function>")
            .field("params", &self.params)
            .finish()
    }
}

/// Builds a rule from an executor closure.
///
/// # Examples
///
/// ```
/// use formguard_validator::foundation::{create_rule, ErrorInfo, Rule};
/// use std::sync::LazyLock;
///
/// static EVEN: LazyLock<ErrorInfo> =
///     LazyLock::new(|| ErrorInfo::register("even", "Must be even"));
///
/// let even = create_rule(|value: &f64, ctx| {
///     if value % 2.0 == 0.0 { Ok(()) } else { Err(ctx.create_error(&EVEN)) }
/// })
/// .exclude(|value, _| *value < 0.0);
///
/// assert!(even.validate(&4.0).is_ok());
/// assert!(even.validate(&-3.0).is_ok());
/// assert!(even.validate(&3.0).is_err());
/// ```
pub fn create_rule<T, F>(executor: F) -> FnRule<T>
where
    T: ?Sized,
    F: Fn(&T, &ValidationContext<'_>) -> ValidationResult + Send + Sync + 'static,
{
    create_rule_with(executor, CommonRuleParams::new())
}

/// Builds a rule from an executor closure and explicit common parameters.
pub fn create_rule_with<T, F>(executor: F, params: CommonRuleParams<T>) -> FnRule<T>
where
    T: ?Sized,
    F: Fn(&T, &ValidationContext<'_>) -> ValidationResult + Send + Sync + 'static,
{
    FnRule {
        executor: Box::new(executor),
        params,
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Convenience methods available on every rule.
pub trait RuleExt<T: ?Sized>: Rule<T> + Sized {
    /// Replaces the message of any error this rule produces, keeping `cause`.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Type-erases the rule for heterogeneous rule lists.
    fn boxed(self) -> Box<dyn Rule<T>>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, R: Rule<T>> RuleExt<T> for R {}
