//! Combinators for composing guards and rules
//!
//! Guard combinators wrap a [`Guard`](crate::foundation::Guard) and change
//! how it is invoked without touching its configuration:
//!
//! - [`optional`]: empty values pass, present values are fully validated
//! - [`deep_partial`]: partial mode for a whole subtree
//! - [`when`]: picks a guard per value
//! - [`or`]: passes when any branch passes
//! - [`transform`]: validates a derived value
//!
//! [`with_message`] works on any rule and replaces the message of the error
//! it produces while keeping its `cause`.

pub mod message;
pub mod optional;
pub mod or;
pub mod partial;
pub mod transform;
pub mod when;

pub use message::{WithMessage, with_message};
pub use optional::{Optional, optional};
pub use or::{Or, or};
pub use partial::{DeepPartial, deep_partial};
pub use transform::{Transform, transform};
pub use when::{When, when};
