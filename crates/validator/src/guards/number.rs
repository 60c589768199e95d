//! Number guard

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{CustomGuard, ErrorInfo, Rule, compose, create_guard};

/// Raised when a number guard receives a non-numeric value.
pub static NUMBER_TYPE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("number_type", "Expected a number"));

/// Accepts a JSON number satisfying every rule; rules see it as `f64`.
pub fn number(rules: Vec<Box<dyn Rule<f64>>>) -> CustomGuard {
    let chain = compose(rules);
    create_guard(move |value, ctx, options| match value {
        Value::Number(n) => match n.as_f64() {
            Some(n) => chain.check(&n, ctx),
            None => Err(options.type_error(ctx, &NUMBER_TYPE_ERROR_INFO)),
        },
        _ => Err(options.type_error(ctx, &NUMBER_TYPE_ERROR_INFO)),
    })
}
