//! DEEP PARTIAL combinator - partial mode for a subtree
//!
//! In partial mode every object field guard below the wrapper runs as
//! optional, so absent fields pass at any depth. Fields that are present
//! are validated as usual.
//!
//! The mode is a property of the context, not of the guards: the wrapper
//! creates one partial context (sharing the caller's root) before any field
//! is validated and hands it to the whole subtree.

use serde_json::Value;

use crate::foundation::{Guard, ValidationContext, ValidationResult};

/// Runs the wrapped guard in partial mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepPartial<G> {
    inner: G,
}

impl<G> DeepPartial<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: Guard> Guard for DeepPartial<G> {
    fn guard(&self, value: &Value, ctx: &ValidationContext<'_>, _optional: bool) -> ValidationResult {
        if ctx.is_partial() {
            return self.inner.guard(value, ctx, true);
        }
        tracing::trace!("entering partial mode");
        let partial = ctx.to_partial();
        self.inner.guard(value, &partial, true)
    }
}

/// Wraps `guard` so that absent values pass throughout its subtree.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::json;
///
/// let patch = deep_partial(object(
///     Schema::new()
///         .field("inn", string(rules![inn_ul()]))
///         .nested("director", Schema::new().field("name", string(rules![person_name()]))),
/// ));
///
/// assert!(patch.validate(&json!({})).is_ok());
/// assert!(patch.validate(&json!({ "director": {} })).is_ok());
/// assert!(patch.validate(&json!({ "inn": "123" })).is_err());
/// ```
pub fn deep_partial<G: Guard>(guard: G) -> DeepPartial<G> {
    DeepPartial::new(guard)
}
