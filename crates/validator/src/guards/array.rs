//! Array guard
//!
//! Item failures are collected, not short-circuited: every element is
//! validated and each failing index gets its own entry in the aggregate.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{
    CustomGuard, ErrorInfo, FnRule, Guard, Issues, Rule, ValidationContext, ValidationError,
    ValidationResult, compose, create_guard, create_rule,
};

/// Raised when an array guard receives a non-array value.
pub static ARRAY_TYPE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("array_type", "Expected a list"));

/// Aggregate error of an array with failing elements.
pub static ARRAY_ITEMS_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("array_items", "Some items are invalid"));

/// Validates every element with `item`.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::json;
///
/// let snils_list = array(string(rules![snils()]));
/// let error = snils_list
///     .validate(&json!(["11223344595", "11223344502", "08765430300"]))
///     .unwrap_err();
///
/// assert_eq!(error.code(), ARRAY_ITEMS_ERROR_INFO.code);
/// assert!(error.item(0).is_none());
/// assert_eq!(error.item(1).unwrap().code(), SNILS_ERROR_INFO.code);
/// assert!(error.item(2).is_none());
/// ```
pub fn array<G>(item: G) -> CustomGuard
where
    G: Guard + 'static,
{
    array_with(item, Vec::new())
}

/// Validates the whole list with `rules`, then every element with `item`.
///
/// List-level rules (`min_items`, `max_items`, ...) short-circuit: when one
/// fails, elements are not inspected.
pub fn array_with<G>(item: G, rules: Vec<Box<dyn Rule<[Value]>>>) -> CustomGuard
where
    G: Guard + 'static,
{
    let chain = compose(rules);
    create_guard(move |value, ctx, options| {
        let Value::Array(items) = value else {
            return Err(options.type_error(ctx, &ARRAY_TYPE_ERROR_INFO));
        };
        chain.check(items, ctx)?;
        check_items(&item, items, ctx)
    })
}

/// A list rule applying `item` to every element, for use among other
/// list rules in [`array_with`].
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::{json, Value};
///
/// // elements are only inspected once the list has the right size
/// let founders = array_with(any(rules![]), rules![
///     min_items(1),
///     max_items(3),
///     array_item(string(rules![inn_ip()])),
/// ]);
///
/// assert!(founders.validate(&json!(["500100732259"])).is_ok());
/// let error = founders.validate(&json!(["500100732259", "1"])).unwrap_err();
/// assert_eq!(error.item(1).unwrap().code(), INN_IP_ERROR_INFO.code);
/// ```
pub fn array_item<G>(item: G) -> FnRule<[Value]>
where
    G: Guard + 'static,
{
    create_rule(move |items: &[Value], ctx| check_items(&item, items, ctx))
}

fn check_items<G: Guard + ?Sized>(
    item: &G,
    items: &[Value],
    ctx: &ValidationContext<'_>,
) -> ValidationResult {
    let issues: BTreeMap<usize, ValidationError> = items
        .iter()
        .enumerate()
        .filter_map(|(index, element)| {
            item.guard(element, ctx, false).err().map(|error| (index, error))
        })
        .collect();

    if issues.is_empty() {
        return Ok(());
    }
    tracing::debug!(failed = issues.len(), total = items.len(), "array items failed validation");
    Err(ctx.create_aggregate_error(&ARRAY_ITEMS_ERROR_INFO, Issues::Items(issues)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::REQUIRED_ERROR_INFO;
    use crate::guards::{STRING_TYPE_ERROR_INFO, number, string};
    use crate::rules;
    use crate::validators::{ARRAY_MAX_ERROR_INFO as MAX_ITEMS_ERROR_INFO, MIN_ERROR_INFO, max_items, min};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn collects_every_failing_index() {
        let guard = array(number(rules![min(0.0)]));
        let error = guard.validate(&json!([-1, 2, -3, 4])).unwrap_err();

        let Some(Issues::Items(items)) = error.issues() else {
            panic!("expected item issues, got {error:?}");
        };
        assert_eq!(items.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert!(items.values().all(|e| e.code() == MIN_ERROR_INFO.code));
    }

    #[test]
    fn empty_elements_fail_as_required() {
        let guard = array(string(Vec::new()));
        let error = guard.validate(&json!(["a", "", 3])).unwrap_err();

        assert_eq!(error.item(1).map(ValidationError::code), Some(REQUIRED_ERROR_INFO.code));
        assert_eq!(error.item(2).map(ValidationError::code), Some(STRING_TYPE_ERROR_INFO.code));
    }

    #[test]
    fn list_rules_short_circuit_items() {
        let guard = array_with(string(Vec::new()), rules![max_items(1)]);
        let error = guard.validate(&json!([1, 2])).unwrap_err();

        assert_eq!(error.code(), MAX_ITEMS_ERROR_INFO.code);
        assert!(error.issues().is_none());
    }

    #[test]
    fn item_rule_runs_after_size_rules() {
        let guard = array_with(
            crate::guards::any(Vec::new()),
            rules![max_items(2), array_item(number(rules![min(0.0)]))],
        );

        assert_eq!(guard.validate(&json!([-1, -2, -3])).unwrap_err().code(), MAX_ITEMS_ERROR_INFO.code);
        let error = guard.validate(&json!([1, -2])).unwrap_err();
        assert_eq!(error.code(), ARRAY_ITEMS_ERROR_INFO.code);
        assert_eq!(error.item(1).map(ValidationError::code), Some(MIN_ERROR_INFO.code));
        assert!(error.item(0).is_none());
    }

    #[test]
    fn item_rule_checks_slices_directly() {
        let rule = array_item(string(Vec::new()));
        let items = [json!("a"), json!(null)];
        let error = rule.validate(&items[..]).unwrap_err();
        assert_eq!(error.item(1).map(ValidationError::code), Some(REQUIRED_ERROR_INFO.code));
    }

    #[test]
    fn empty_list_is_required() {
        let error = array(string(Vec::new())).validate(&json!([])).unwrap_err();
        assert_eq!(error.code(), REQUIRED_ERROR_INFO.code);
    }

    #[test]
    fn non_lists_are_type_errors() {
        let error = array(string(Vec::new())).validate(&json!({ "0": "a" })).unwrap_err();
        assert_eq!(error.code(), ARRAY_TYPE_ERROR_INFO.code);
    }
}
