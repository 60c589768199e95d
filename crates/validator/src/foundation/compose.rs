//! Short-circuiting sequential composition
//!
//! [`compose`] runs an ordered list of rules against one value and one
//! context and stops at the first error. Declaration order is the only
//! ordering guarantee, which is what lets a presence check sit in front of
//! checks that assume presence.

use std::fmt;

use crate::foundation::context::ValidationContext;
use crate::foundation::rule::{Rule, ValidationResult};

/// An ordered chain of rules; the first error wins.
pub struct Compose<T: ?Sized> {
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T: ?Sized> Compose<T> {
    pub fn new(rules: Vec<Box<dyn Rule<T>>>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Rule<T> for Compose<T> {
    fn check(&self, value: &T, ctx: &ValidationContext<'_>) -> ValidationResult {
        for rule in &self.rules {
            rule.check(value, ctx)?;
        }
        Ok(())
    }
}

impl<T: ?Sized> fmt::Debug for Compose<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Composes rules into one; see the [module docs](self).
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// let name = compose(rules![min_length(2), max_length(5)]);
/// assert!(name.validate("anna").is_ok());
/// assert_eq!(name.validate("a").unwrap_err().code(), STRING_MIN_ERROR_INFO.code);
/// ```
pub fn compose<T: ?Sized>(rules: Vec<Box<dyn Rule<T>>>) -> Compose<T> {
    Compose::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::error::ErrorInfo;
    use crate::foundation::rule::{RuleExt, create_rule};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, LazyLock};

    static FIRST: LazyLock<ErrorInfo> = LazyLock::new(|| ErrorInfo::register("first", "First"));
    static SECOND: LazyLock<ErrorInfo> = LazyLock::new(|| ErrorInfo::register("second", "Second"));

    #[test]
    fn empty_chain_passes() {
        assert!(compose::<str>(Vec::new()).validate("x").is_ok());
    }

    #[test]
    fn first_error_short_circuits() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&later_calls);

        let chain = compose(vec![
            create_rule(|_: &str, ctx| Err(ctx.create_error(&FIRST))).boxed(),
            create_rule(move |_: &str, ctx| {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(ctx.create_error(&SECOND))
            })
            .boxed(),
        ]);

        assert_eq!(chain.validate("x").unwrap_err().code(), FIRST.code);
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn falls_through_to_later_rule() {
        let chain = compose(vec![
            create_rule(|_: &str, _| Ok(())).boxed(),
            create_rule(|_: &str, ctx| Err(ctx.create_error(&SECOND))).boxed(),
        ]);
        assert_eq!(chain.validate("x").unwrap_err().code(), SECOND.code);
    }

    #[test]
    fn every_rule_sees_the_same_context() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::<usize>::new()));
        let record = |seen: Arc<std::sync::Mutex<Vec<usize>>>| {
            create_rule(move |_: &str, ctx| {
                seen.lock().unwrap().push(std::ptr::from_ref(ctx) as usize);
                Ok(())
            })
            .boxed()
        };

        let chain = compose(vec![record(Arc::clone(&seen)), record(Arc::clone(&seen))]);
        let root = serde_json::json!("x");
        let ctx = ValidationContext::new(&root);
        chain.check("x", &ctx).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|ptr| *ptr == std::ptr::from_ref(&ctx) as usize));
    }
}
