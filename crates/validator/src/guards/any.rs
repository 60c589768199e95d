//! Untyped guard

use crate::foundation::{CustomGuard, Rule, compose, create_guard};
use serde_json::Value;

/// Accepts any present value satisfying every rule.
///
/// Useful for fields whose shape is checked by a custom `Rule<Value>`, or
/// when only presence matters.
pub fn any(rules: Vec<Box<dyn Rule<Value>>>) -> CustomGuard {
    let chain = compose(rules);
    create_guard(move |value, ctx, _| chain.check(value, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::REQUIRED_ERROR_INFO;
    use serde_json::json;

    #[test]
    fn only_presence_is_checked() {
        let guard = any(Vec::new());
        assert!(guard.validate(&json!(0)).is_ok());
        assert!(guard.validate(&json!([1])).is_ok());
        assert_eq!(guard.validate(&json!([])).unwrap_err().code(), REQUIRED_ERROR_INFO.code);
    }
}
