//! Boolean guard

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{CustomGuard, ErrorInfo, Rule, compose, create_guard};

pub static BOOLEAN_TYPE_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("boolean_type", "Expected true or false"));

/// Accepts `true` or `false`. `false` is a present value.
pub fn boolean(rules: Vec<Box<dyn Rule<bool>>>) -> CustomGuard {
    let chain = compose(rules);
    create_guard(move |value, ctx, options| match value {
        Value::Bool(flag) => chain.check(flag, ctx),
        _ => Err(options.type_error(ctx, &BOOLEAN_TYPE_ERROR_INFO)),
    })
}
