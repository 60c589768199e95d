//! # formguard-validator
//!
//! A guard/rule composition engine for validating structured records:
//! identifiers, free-text fields, numbers, dates, and nested objects and
//! lists built from them.
//!
//! ## Quick Start
//!
//! ```
//! use formguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let entrepreneur = object(
//!     Schema::new()
//!         .field("name", string(rules![person_name()]))
//!         .field("inn", string(rules![inn_ip()]))
//!         .field("ogrnip", string(rules![ogrn_ip()]))
//!         .field("snils", optional(string(rules![snils()]))),
//! );
//!
//! let error = entrepreneur
//!     .validate(&json!({ "name": "Иван", "inn": "500100732258", "ogrnip": "304500116000157" }))
//!     .unwrap_err();
//!
//! assert_eq!(error.field("inn").unwrap().code(), INN_IP_ERROR_INFO.code);
//! assert_eq!(to_pretty_error(&error), "inn: Invalid individual INN");
//! ```
//!
//! ## Building blocks
//!
//! - [`Rule`](foundation::Rule): a pure check of one typed value. Leaf rules
//!   live in [`validators`]; write new ones with
//!   [`create_rule`](foundation::create_rule).
//! - [`Guard`](foundation::Guard): a type gate over
//!   [`serde_json::Value`] with a built-in required check. The type guards
//!   live in [`guards`]; write new ones with
//!   [`create_guard`](foundation::create_guard).
//! - [`combinators`]: `optional`, `deep_partial`, `when`, `or`, `transform`.
//! - [`report`]: flattening nested errors for display.
//!
//! Errors are values: every check returns
//! [`ValidationResult`](foundation::ValidationResult), and callers branch on
//! `error.code()` while showing `error.message()`.

// ValidationError carries its cause and nested issues inline; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

#[cfg(feature = "async")]
pub mod asynchronous;
pub mod combinators;
pub mod foundation;
pub mod guards;
mod macros;
pub mod prelude;
pub mod report;
pub mod validators;
