//! OPTIONAL combinator - empty values are valid

use serde_json::Value;

use crate::foundation::{Guard, ValidationContext, ValidationResult};

/// Invokes the wrapped guard as optional.
///
/// The guard's own required failure is discarded; every other failure is
/// returned unchanged. Child guards of the wrapped guard are not affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<G> {
    pub(crate) inner: G,
}

impl<G> Optional<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Guard> Guard for Optional<G> {
    fn guard(&self, value: &Value, ctx: &ValidationContext<'_>, _optional: bool) -> ValidationResult {
        self.inner.guard(value, ctx, true)
    }
}

/// Marks `guard` optional for every invocation.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::json;
///
/// let kpp_field = optional(string(rules![kpp()]));
///
/// assert!(kpp_field.validate(&json!(null)).is_ok());
/// assert!(kpp_field.validate(&json!("")).is_ok());
/// assert_eq!(kpp_field.validate(&json!("000000000")).unwrap_err().code(), KPP_ZEROS_ONLY_ERROR_INFO.code);
/// ```
pub fn optional<G: Guard>(guard: G) -> Optional<G> {
    Optional::new(guard)
}
