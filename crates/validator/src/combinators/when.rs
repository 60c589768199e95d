//! WHEN combinator - conditional validation
//!
//! Chooses a guard per value. The condition sees the value and the shared
//! context, so it can branch on sibling fields through `ctx.root()`.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Guard, GuardExt, ValidationContext, ValidationResult};

/// Applies `then` when the condition holds, `otherwise` (if any) when not.
pub struct When<C, T> {
    condition: C,
    then: T,
    otherwise: Option<Arc<dyn Guard>>,
}

impl<C, T> When<C, T> {
    /// Guard used when the condition does not hold. Without one, such
    /// values pass.
    #[must_use = "builder methods must be chained or built"]
    pub fn otherwise<G: Guard + 'static>(mut self, guard: G) -> Self {
        self.otherwise = Some(guard.shared());
        self
    }
}

impl<C, T> Guard for When<C, T>
where
    C: Fn(&Value, &ValidationContext<'_>) -> bool + Send + Sync,
    T: Guard,
{
    fn guard(&self, value: &Value, ctx: &ValidationContext<'_>, optional: bool) -> ValidationResult {
        if (self.condition)(value, ctx) {
            return self.then.guard(value, ctx, optional);
        }
        match &self.otherwise {
            Some(otherwise) => otherwise.guard(value, ctx, optional),
            None => Ok(()),
        }
    }
}

impl<C, T: fmt::Debug> fmt::Debug for When<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("condition", &"<function>")
            .field("then", &self.then)
            .field("otherwise", &self.otherwise.is_some())
            .finish()
    }
}

/// Conditionally applies `then`.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::json;
///
/// // 10 digits for companies, 12 for individual entrepreneurs
/// let inn = when(
///     |_, ctx| ctx.root_field("kind") == Some(&json!("company")),
///     string(rules![inn_ul()]),
/// )
/// .otherwise(string(rules![inn_ip()]));
///
/// let company = Schema::new().field("kind", string(vec![])).field("inn", inn);
/// let form = object(company);
///
/// assert!(form.validate(&json!({ "kind": "company", "inn": "7728168971" })).is_ok());
/// assert!(form.validate(&json!({ "kind": "person", "inn": "500100732259" })).is_ok());
/// assert!(form.validate(&json!({ "kind": "person", "inn": "7728168971" })).is_err());
/// ```
pub fn when<C, T>(condition: C, then: T) -> When<C, T>
where
    C: Fn(&Value, &ValidationContext<'_>) -> bool + Send + Sync,
    T: Guard,
{
    When {
        condition,
        then,
        otherwise: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::optional;
    use crate::foundation::{REQUIRED_ERROR_INFO, Rule};
    use crate::guards::{NUMBER_TYPE_ERROR_INFO, number, string};
    use serde_json::json;

    #[test]
    fn test_when_false_without_otherwise_passes() {
        let guard = when(|value: &Value, _: &ValidationContext<'_>| value.is_string(), string(Vec::new()));
        assert!(guard.validate(&json!(5)).is_ok());
    }

    #[test]
    fn test_when_picks_branch() {
        let guard = when(|value: &Value, _: &ValidationContext<'_>| value.is_string(), string(Vec::new()))
            .otherwise(number(Vec::new()));

        assert!(guard.validate(&json!("a")).is_ok());
        assert!(guard.validate(&json!(1)).is_ok());
        assert_eq!(guard.validate(&json!(true)).unwrap_err().code(), NUMBER_TYPE_ERROR_INFO.code);
    }

    #[test]
    fn test_when_forwards_optionality() {
        let guard = optional(when(|_: &Value, _: &ValidationContext<'_>| true, number(Vec::new())));
        assert!(guard.validate(&json!(null)).is_ok());

        let required = when(|_: &Value, _: &ValidationContext<'_>| true, number(Vec::new()));
        assert_eq!(required.validate(&json!(null)).unwrap_err().code(), REQUIRED_ERROR_INFO.code);
        assert_eq!(required.validate(&json!("x")).unwrap_err().code(), NUMBER_TYPE_ERROR_INFO.code);
    }
}
