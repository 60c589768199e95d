//! Type guards
//!
//! Guards are the entry points of a validation tree. Each one checks that a
//! [`Value`](serde_json::Value) is present (through the built-in required
//! check), that it has the expected shape, and then runs its typed rules.
//!
//! - **Scalars**: [`string`], [`number`], [`boolean`], [`date`], [`any`]
//! - **Collections**: [`array`], [`array_with`], and the [`array_item`] list rule
//! - **Records**: [`object`] over a [`Schema`]
//!
//! Every constructor returns a [`CustomGuard`](crate::foundation::CustomGuard),
//! so messages and optionality can be redefined with `define`.

mod any;
mod array;
mod boolean;
mod date;
mod number;
mod object;
mod string;

pub use any::any;
pub use array::{ARRAY_ITEMS_ERROR_INFO, ARRAY_TYPE_ERROR_INFO, array, array_item, array_with};
pub use boolean::{BOOLEAN_TYPE_ERROR_INFO, boolean};
pub use date::{DATE_TYPE_ERROR_INFO, INVALID_DATE_ERROR_INFO, date, parse_date};
pub use number::{NUMBER_TYPE_ERROR_INFO, number};
pub use object::{OBJECT_FIELDS_ERROR_INFO, OBJECT_TYPE_ERROR_INFO, Schema, object};
pub use string::{STRING_TYPE_ERROR_INFO, string};
