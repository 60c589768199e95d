//! Prelude module for convenient imports.
//!
//! Provides a single `use formguard_validator::prelude::*;` import that
//! brings in the traits, guards, combinators, leaf rules and macros needed
//! to declare and run a schema.
//!
//! # Examples
//!
//! ```
//! use formguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let company = object(
//!     Schema::new()
//!         .field("inn", string(rules![inn_ul()]))
//!         .field("kpp", string(rules![kpp()]))
//!         .field("ogrn", optional(string(rules![ogrn_ul()]))),
//! );
//!
//! assert!(company.validate(&json!({ "inn": "7728168971", "kpp": "773301001" })).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, context
// ============================================================================

pub use crate::foundation::{
    CustomGuard, ErrorCode, ErrorInfo, Guard, GuardExt, GuardOptions, Issues, Overrides,
    REQUIRED_ERROR_INFO, Required, Rule, RuleExt, ValidationContext, ValidationError,
    ValidationResult, compose, create_context, create_error_code, create_guard, create_rule,
    required,
};

// ============================================================================
// GUARDS
// ============================================================================

pub use crate::guards::{
    ARRAY_ITEMS_ERROR_INFO, ARRAY_TYPE_ERROR_INFO, BOOLEAN_TYPE_ERROR_INFO, DATE_TYPE_ERROR_INFO,
    INVALID_DATE_ERROR_INFO, NUMBER_TYPE_ERROR_INFO, OBJECT_FIELDS_ERROR_INFO,
    OBJECT_TYPE_ERROR_INFO, STRING_TYPE_ERROR_INFO, Schema, any, array, array_item, array_with, boolean, date,
    number, object, string,
};

// ============================================================================
// VALIDATORS: All built-in leaf rules
// ============================================================================

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{deep_partial, optional, or, transform, when, with_message};

// ============================================================================
// REPORTING
// ============================================================================

pub use crate::report::{ErrorPath, PathSegment, to_plain_error, to_pretty_error};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{guards, rules};

// ============================================================================
// ASYNC-GATED
// ============================================================================

#[cfg(feature = "async")]
pub use crate::asynchronous::{
    AsyncGuard, AsyncRule, AsyncSchema, object_async, string_async,
};
