//! OR combinator - any branch may pass
//!
//! Branches run in order and the first success wins. When every branch
//! fails, the error of the last branch is returned unchanged, so a
//! catch-all branch placed last decides the reported message.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Guard, ValidationContext, ValidationResult};

/// Passes when at least one branch passes.
#[derive(Clone)]
pub struct Or {
    branches: Vec<Arc<dyn Guard>>,
}

impl Or {
    pub fn new(branches: Vec<Arc<dyn Guard>>) -> Self {
        Self { branches }
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl Guard for Or {
    fn guard(&self, value: &Value, ctx: &ValidationContext<'_>, optional: bool) -> ValidationResult {
        let mut last = None;
        for branch in &self.branches {
            match branch.guard(value, ctx, optional) {
                Ok(()) => return Ok(()),
                Err(error) => last = Some(error),
            }
        }
        match last {
            Some(error) => {
                tracing::trace!(branches = self.branches.len(), "no branch passed");
                Err(error)
            }
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("branches", &self.branches.len())
            .finish()
    }
}

/// Combines `branches`; an empty list passes everything.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
/// use serde_json::json;
///
/// let inn = or(guards![string(rules![inn_ul()]), string(rules![inn_ip()])]);
///
/// assert!(inn.validate(&json!("7728168971")).is_ok());
/// assert!(inn.validate(&json!("500100732259")).is_ok());
/// assert_eq!(inn.validate(&json!("123")).unwrap_err().code(), INN_IP_ERROR_INFO.code);
/// ```
pub fn or(branches: Vec<Arc<dyn Guard>>) -> Or {
    Or::new(branches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::optional;
    use crate::foundation::{REQUIRED_ERROR_INFO, Rule};
    use crate::guards;
    use crate::guards::{BOOLEAN_TYPE_ERROR_INFO, boolean, number, string};
    use serde_json::json;

    #[test]
    fn test_or_first_success_wins() {
        let guard = or(guards![number(Vec::new()), string(Vec::new())]);
        assert!(guard.validate(&json!(1)).is_ok());
        assert!(guard.validate(&json!("1")).is_ok());
    }

    #[test]
    fn test_or_reports_last_error() {
        let guard = or(guards![number(Vec::new()), boolean(Vec::new())]);
        let error = guard.validate(&json!("x")).unwrap_err();
        assert_eq!(error.code(), BOOLEAN_TYPE_ERROR_INFO.code);
    }

    #[test]
    fn test_or_empty_passes() {
        assert!(or(Vec::new()).validate(&json!(1)).is_ok());
    }

    #[test]
    fn test_or_forwards_optionality() {
        let guard = or(guards![number(Vec::new()), string(Vec::new())]);
        assert_eq!(guard.validate(&json!(null)).unwrap_err().code(), REQUIRED_ERROR_INFO.code);
        assert!(optional(guard).validate(&json!(null)).is_ok());
    }
}
