//! Macros for building rule and guard lists with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rules!`]: boxes heterogeneous rules into a `Vec<Box<dyn Rule<T>>>`
//! - [`guards!`]: shares heterogeneous guards into a `Vec<Arc<dyn Guard>>`
//!
//! # Examples
//!
//! ```
//! use formguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let code = string(rules![only_number(), min_length(6), max_length(6)]);
//! let id = or(guards![code, string(rules![guid()])]);
//!
//! assert!(id.validate(&json!("101000")).is_ok());
//! assert!(id.validate(&json!("3f2504e0-4f89-11d3-9a0c-0305e82c3301")).is_ok());
//! ```

// ============================================================================
// RULES MACRO
// ============================================================================

/// Boxes each rule so rules of different types fit one list.
///
/// The element type is inferred from where the list is used, so the same
/// invocation works for `string`, `number`, `date` and the other guards.
///
/// ```
/// use formguard_validator::prelude::*;
///
/// let chain: Vec<Box<dyn Rule<str>>> = rules![min_length(2), max_length(5)];
/// assert_eq!(chain.len(), 2);
///
/// let empty: Vec<Box<dyn Rule<f64>>> = rules![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![$($crate::foundation::RuleExt::boxed($rule)),+]
    };
}

// ============================================================================
// GUARDS MACRO
// ============================================================================

/// Type-erases each guard for [`or`](crate::combinators::or) and similar
/// combinators.
#[macro_export]
macro_rules! guards {
    () => {
        ::std::vec::Vec::<::std::sync::Arc<dyn $crate::foundation::Guard>>::new()
    };
    ($($guard:expr),+ $(,)?) => {
        ::std::vec![$($crate::foundation::GuardExt::shared($guard)),+]
    };
}

// ============================================================================
// TESTS
// ============================================================================
