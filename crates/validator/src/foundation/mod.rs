//! Core validation types and traits
//!
//! This module contains the building blocks every other module is made of:
//!
//! - **Errors**: [`ErrorCode`], [`ErrorInfo`], [`ValidationError`], [`Issues`]
//! - **Context**: [`ValidationContext`], [`Overrides`], [`create_context`]
//! - **Rules**: [`Rule`], [`RuleExt`], [`create_rule`], [`compose`]
//! - **Guards**: [`Guard`], [`GuardExt`], [`GuardOptions`], [`create_guard`]
//! - **Presence**: [`Required`], [`required`], [`is_empty_value`]
//!
//! # Architecture
//!
//! ## 1. One context per call
//!
//! A top-level validation creates a single [`ValidationContext`]; every
//! nested rule receives it by reference. Rules never mutate it, which is why
//! the value being checked is passed separately.
//!
//! ## 2. Typed leaves, dynamic gates
//!
//! Leaf rules are typed (`Rule<str>`, `Rule<f64>`, ...). Guards accept any
//! [`serde_json::Value`], establish its type, and only then hand a typed
//! view to their rules.
//!
//! ## 3. Identity-based error codes
//!
//! Failures are matched by [`ErrorCode`] identity. Messages can be
//! replaced freely without breaking programmatic checks.

pub mod compose;
pub mod context;
pub mod error;
pub mod guard;
pub mod required;
pub mod rule;

pub use compose::{Compose, compose};
pub use context::{Overrides, ToRoot, ValidationContext, create_context};
pub use error::{ErrorCode, ErrorInfo, Issues, ValidationError, create_error_code};
pub use guard::{CustomGuard, Guard, GuardExt, GuardOptions, create_guard, create_guard_with};
pub use required::{REQUIRED_ERROR_INFO, Required, is_empty_value, is_null_value, required};
pub use rule::{
    CommonRuleParams, FnRule, Rule, RuleExt, ValidationResult, create_rule, create_rule_with,
};
